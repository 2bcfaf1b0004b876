//! Transform chain - the pure half of the pipeline
//!
//! Owns both layer lists and the serializer, and implements the ordering
//! discipline once so the sync and async composers cannot drift apart:
//!
//! - `encode`: pre layers forward (index 0 first), serialize, post layers
//!   forward (index 0 first)
//! - `decode`: post layers inverse (highest index first), deserialize,
//!   pre layers inverse (highest index first)
//!
//! Every step is an in-memory transform; nothing here suspends or touches
//! a backend.

use crate::domain::ports::{BoxLayer, BoxSerializer, Layer, Serializer};
use crate::error::PipelineResult;

/// Ordered layer lists around a single serialization step
pub struct TransformChain<I, O> {
    serializer: BoxSerializer<I, O>,
    pre: Vec<BoxLayer<I>>,
    post: Vec<BoxLayer<O>>,
}

impl<I, O> TransformChain<I, O> {
    /// Create a chain with no layers around the given serializer
    pub fn new(serializer: impl Serializer<I, O> + 'static) -> Self {
        Self {
            serializer: Box::new(serializer),
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Append a layer to the entity-typed (pre-serialization) list
    pub fn push_pre(&mut self, layer: impl Layer<I> + 'static) {
        self.pre.push(Box::new(layer));
    }

    /// Append a layer to the storage-typed (post-serialization) list
    pub fn push_post(&mut self, layer: impl Layer<O> + 'static) {
        self.post.push(Box::new(layer));
    }

    /// Number of entity-typed layers
    pub fn pre_len(&self) -> usize {
        self.pre.len()
    }

    /// Number of storage-typed layers
    pub fn post_len(&self) -> usize {
        self.post.len()
    }

    /// Run the write-path transform: entity to stored representation
    pub fn encode(&self, mut entity: I) -> PipelineResult<O> {
        for layer in &self.pre {
            entity = layer.forward(entity)?;
        }
        let mut stored = self.serializer.serialize(entity)?;
        for layer in &self.post {
            stored = layer.forward(stored)?;
        }
        Ok(stored)
    }

    /// Run the read-path transform: stored representation to entity
    ///
    /// Exact algebraic inverse of [`encode`]: each list is walked in
    /// reverse, calling `inverse`.
    ///
    /// [`encode`]: TransformChain::encode
    pub fn decode(&self, mut stored: O) -> PipelineResult<I> {
        for layer in self.post.iter().rev() {
            stored = layer.inverse(stored)?;
        }
        let mut entity = self.serializer.deserialize(stored)?;
        for layer in self.pre.iter().rev() {
            entity = layer.inverse(entity)?;
        }
        Ok(entity)
    }
}
