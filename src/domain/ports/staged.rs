//! Staged layer port - the combined-list layer shape
//!
//! Some layers need to touch both the entity type and its stored
//! representation (a validator that checks the entity on the way out and
//! the decoded entity on the way in, say). Rather than modeling that as a
//! second pipeline behavior, a staged layer is split into two ordinary
//! [`Layer`] halves: one for the pre list, one for the post list.

use std::sync::Arc;

use crate::domain::ports::layer::{BoxLayer, Layer};
use crate::error::TransformError;

/// A layer with hooks on both sides of the serialization step
///
/// The four hooks map onto the pipeline as follows: `before_serialize` and
/// `after_serialize` run on the write path, in that order;
/// `before_deserialize` and `after_deserialize` run on the read path, in
/// that order. The same inverse contract as [`Layer`] applies hook-wise:
/// `after_deserialize` must undo `before_serialize`, and
/// `before_deserialize` must undo `after_serialize`.
pub trait StagedLayer<I, O>: Send + Sync {
    /// Reshape the entity before it is serialized (write path)
    fn before_serialize(&self, entity: I) -> Result<I, TransformError>;

    /// Reshape the stored value after serialization (write path)
    fn after_serialize(&self, stored: O) -> Result<O, TransformError>;

    /// Undo `after_serialize` (read path)
    fn before_deserialize(&self, stored: O) -> Result<O, TransformError>;

    /// Undo `before_serialize` (read path)
    fn after_deserialize(&self, entity: I) -> Result<I, TransformError>;
}

/// Entity-typed half of a staged layer
struct EntityHalf<I, O> {
    inner: Arc<dyn StagedLayer<I, O>>,
}

impl<I, O> Layer<I> for EntityHalf<I, O> {
    fn forward(&self, value: I) -> Result<I, TransformError> {
        self.inner.before_serialize(value)
    }

    fn inverse(&self, value: I) -> Result<I, TransformError> {
        self.inner.after_deserialize(value)
    }
}

/// Storage-typed half of a staged layer
struct StoredHalf<I, O> {
    inner: Arc<dyn StagedLayer<I, O>>,
}

impl<I, O> Layer<O> for StoredHalf<I, O> {
    fn forward(&self, value: O) -> Result<O, TransformError> {
        self.inner.after_serialize(value)
    }

    fn inverse(&self, value: O) -> Result<O, TransformError> {
        self.inner.before_deserialize(value)
    }
}

/// Split a staged layer into its pre and post halves
///
/// Push the first half onto the pre list and the second onto the post
/// list (at matching positions, if combining with other layers). Both
/// halves share the staged layer, so stateful implementations see calls
/// from both sides.
pub fn split_staged<I, O>(layer: impl StagedLayer<I, O> + 'static) -> (BoxLayer<I>, BoxLayer<O>)
where
    I: 'static,
    O: 'static,
{
    let inner: Arc<dyn StagedLayer<I, O>> = Arc::new(layer);
    (
        Box::new(EntityHalf {
            inner: Arc::clone(&inner),
        }),
        Box::new(StoredHalf { inner }),
    )
}
