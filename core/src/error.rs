//! Error types for the scrawl inference core.
//!
//! The two variants split cleanly by recoverability: `MalformedWeights` is
//! a load-time failure the surrounding application must treat as fatal
//! (inferring with corrupt parameters is never acceptable), while
//! `ShapeMismatch` is a caller mistake that can be retried with a
//! correctly flattened input.

use thiserror::Error;

/// All error conditions in the scrawl inference core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrawlError {
    /// A weight matrix or bias vector does not match the fixed
    /// 784 → 64 → 48 → 10 topology. `layer` is 1-based.
    #[error("malformed weights in layer {layer}: expected {expected} values, got {actual}")]
    MalformedWeights {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// The caller supplied an input vector of the wrong length.
    /// The engine never truncates or pads.
    #[error("input shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type ScrawlResult<T> = Result<T, ScrawlError>;
