//! Store implementations
//!
//! Concrete backends for the [`Store`] and [`AsyncStore`] ports.
//!
//! [`Store`]: crate::domain::ports::Store
//! [`AsyncStore`]: crate::domain::ports::AsyncStore

pub mod binary_file;
pub mod memory;
pub mod text_file;
mod writer;

pub use binary_file::{AsyncBinaryFileStore, BinaryFileStore};
pub use memory::InMemoryStore;
pub use text_file::{AsyncTextFileStore, TextFileStore};
