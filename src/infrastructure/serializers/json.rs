//! JSON serializer
//!
//! serde_json-backed implementation of the serializer port, available for
//! both string-shaped and byte-shaped storage types.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::Serializer;
use crate::error::SerializationError;

/// Serializes any serde-capable entity to JSON
///
/// Implements [`Serializer<T, String>`] and [`Serializer<T, Vec<u8>>`];
/// pick the storage type through the composer's type parameters.
///
/// [`Serializer<T, String>`]: crate::domain::ports::Serializer
/// [`Serializer<T, Vec<u8>>`]: crate::domain::ports::Serializer
pub struct JsonSerializer<T> {
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonSerializer<T> {
    /// Create a JSON serializer
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<T> Default for JsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Serializer<T, String> for JsonSerializer<T>
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, entity: T) -> Result<String, SerializationError> {
        serde_json::to_string(&entity).map_err(|e| SerializationError::Serialize(e.to_string()))
    }

    fn deserialize(&self, stored: String) -> Result<T, SerializationError> {
        serde_json::from_str(&stored).map_err(|e| SerializationError::Deserialize(e.to_string()))
    }
}

impl<T> Serializer<T, Vec<u8>> for JsonSerializer<T>
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, entity: T) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(&entity).map_err(|e| SerializationError::Serialize(e.to_string()))
    }

    fn deserialize(&self, stored: Vec<u8>) -> Result<T, SerializationError> {
        serde_json::from_slice(&stored).map_err(|e| SerializationError::Deserialize(e.to_string()))
    }
}
