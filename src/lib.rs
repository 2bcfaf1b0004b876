//! Laminate - layered single-entity storage
//!
//! Laminate lets application code do CRUD on its own entity type while the
//! backend stores a serialized representation. An ordered chain of
//! reversible transform layers runs between the two: forward on every
//! write, inverted in exact reverse order on every read.
//!
//! ```
//! use laminate::{FnLayer, InMemoryStore, JsonSerializer, LayeredStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Greeting {
//!     text: String,
//! }
//!
//! let store: LayeredStore<Greeting, String> =
//!     LayeredStore::new(InMemoryStore::new(), JsonSerializer::new())
//!         .with_post_layer(FnLayer::new(
//!             |json: String| Ok(json.chars().rev().collect()),
//!             |json: String| Ok(json.chars().rev().collect()),
//!         ));
//!
//! store.create(Greeting { text: "hi".into() }).unwrap();
//! assert_eq!(store.read().unwrap().text, "hi");
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod pipeline;

// Re-exports for convenience
pub use domain::ports::{
    split_staged, AsyncStore, BoxAsyncStore, BoxLayer, BoxSerializer, BoxStore, FnLayer, Layer,
    Serializer, StagedLayer, Store,
};
pub use error::{
    PipelineError, PipelineResult, SerializationError, StorageError, TransformError,
};
pub use infrastructure::{
    AsyncBinaryFileStore, AsyncTextFileStore, BinaryFileStore, InMemoryStore, JsonSerializer,
    TextFileStore,
};
pub use pipeline::{AsyncLayeredStore, LayeredStore, TransformChain};
