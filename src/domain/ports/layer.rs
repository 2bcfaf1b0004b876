//! Layer port - a reversible, type-preserving transform step
//!
//! Layers are the units the pipeline composes: each one reshapes a value
//! on the write path and undoes that reshaping on the read path.

use crate::error::TransformError;

/// Boxed layer, as held by the pipeline's layer lists
pub type BoxLayer<T> = Box<dyn Layer<T>>;

/// A reversible transform over a single type
///
/// The pipeline applies `forward` on the write path and `inverse` on the
/// read path. Implementations must guarantee `inverse(forward(v))`
/// recovers `v` for every value they are expected to handle; the pipeline
/// relies on this contract and never verifies it, so a layer that violates
/// it silently changes what round-trips return.
///
/// Layers must be deterministic for a given input and must not retain
/// per-call state; the composer treats them as pure.
pub trait Layer<T>: Send + Sync {
    /// Apply the transform (write path)
    fn forward(&self, value: T) -> Result<T, TransformError>;

    /// Undo the transform (read path)
    fn inverse(&self, value: T) -> Result<T, TransformError>;
}

impl<T, L> Layer<T> for Box<L>
where
    L: Layer<T> + ?Sized,
{
    fn forward(&self, value: T) -> Result<T, TransformError> {
        (**self).forward(value)
    }

    fn inverse(&self, value: T) -> Result<T, TransformError> {
        (**self).inverse(value)
    }
}

/// Layer built from a pair of closures
///
/// Handy for small inline transforms where a named type would be noise:
///
/// ```
/// use laminate::{FnLayer, Layer};
///
/// let shout = FnLayer::new(
///     |s: String| Ok(s.to_uppercase()),
///     |s: String| Ok(s.to_lowercase()),
/// );
/// assert_eq!(shout.forward("ann".to_string()).unwrap(), "ANN");
/// ```
pub struct FnLayer<F, G> {
    forward: F,
    inverse: G,
}

impl<F, G> FnLayer<F, G> {
    /// Create a layer from a forward closure and its inverse
    pub fn new(forward: F, inverse: G) -> Self {
        Self { forward, inverse }
    }
}

impl<T, F, G> Layer<T> for FnLayer<F, G>
where
    F: Fn(T) -> Result<T, TransformError> + Send + Sync,
    G: Fn(T) -> Result<T, TransformError> + Send + Sync,
{
    fn forward(&self, value: T) -> Result<T, TransformError> {
        (self.forward)(value)
    }

    fn inverse(&self, value: T) -> Result<T, TransformError> {
        (self.inverse)(value)
    }
}
