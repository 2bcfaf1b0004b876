//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `stores/` - storage backends (in-memory, text file, binary file)
//! - `serializers/` - serialization formats (JSON)

pub mod serializers;
pub mod stores;

// Re-export for convenience
pub use serializers::JsonSerializer;
pub use stores::{
    AsyncBinaryFileStore, AsyncTextFileStore, BinaryFileStore, InMemoryStore, TextFileStore,
};
