//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the pipeline.
//! Infrastructure layer provides concrete implementations.

pub mod async_store;
pub mod layer;
pub mod serializer;
pub mod staged;
pub mod store;

pub use async_store::{AsyncStore, BoxAsyncStore};
pub use layer::{BoxLayer, FnLayer, Layer};
pub use serializer::{BoxSerializer, Serializer};
pub use staged::{split_staged, StagedLayer};
pub use store::{BoxStore, Store};
