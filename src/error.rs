//! Error types for Laminate
//!
//! Uses `thiserror` for library errors. Each pipeline stage has its own
//! error type; `PipelineError` is the composer-level sum of the three.

use thiserror::Error;

/// Result type alias for composer operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error raised by a transform layer
#[derive(Error, Debug)]
pub enum TransformError {
    /// Input did not have the shape the layer expects
    #[error("invalid input shape: {0}")]
    InvalidShape(String),

    /// Any other layer-specific failure
    #[error("layer failed: {0}")]
    Layer(String),
}

/// Error raised by the serializer
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Entity could not be converted to its stored representation
    #[error("serialize failed: {0}")]
    Serialize(String),

    /// Stored representation could not be converted back to an entity
    #[error("deserialize failed: {0}")]
    Deserialize(String),
}

/// Error raised by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store already holds an entity
    #[error("entity already exists")]
    AlreadyExists,

    /// The store holds no entity
    #[error("entity not found")]
    NotFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Composer-level error: whichever stage failed first
///
/// The composer performs no recovery; the first failing stage aborts the
/// pipeline and its error is surfaced unchanged.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
