//! Serializer port - conversion between entity and stored representation
//!
//! Exactly one serializer sits in every pipeline, between the pre and
//! post layer lists.

use crate::error::SerializationError;

/// Boxed serializer, as held by the pipeline
pub type BoxSerializer<I, O> = Box<dyn Serializer<I, O>>;

/// Converts an entity to its stored representation and back
///
/// `deserialize(serialize(v))` must recover `v` for every entity the
/// serializer accepts; as with layers, the pipeline assumes this and does
/// not check it.
pub trait Serializer<I, O>: Send + Sync {
    /// Convert an entity into the stored representation
    fn serialize(&self, entity: I) -> Result<O, SerializationError>;

    /// Convert a stored representation back into an entity
    fn deserialize(&self, stored: O) -> Result<I, SerializationError>;
}
