//! Pipeline composition
//!
//! The write path runs entity-typed layers forward in list order,
//! serializes once, then runs storage-typed layers forward in list order.
//! The read path is the exact algebraic inverse: storage-typed layers
//! inverted in reverse order, one deserialization, entity-typed layers
//! inverted in reverse order.
//!
//! [`TransformChain`] implements that discipline; [`LayeredStore`] and
//! [`AsyncLayeredStore`] wrap it around a sync or async backend.

pub mod async_layered;
pub mod chain;
pub mod layered;

pub use async_layered::AsyncLayeredStore;
pub use chain::TransformChain;
pub use layered::LayeredStore;
