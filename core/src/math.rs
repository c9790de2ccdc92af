//! f32 math kernels for dense-layer inference.
//!
//! The whole network is three matrix-vector products
//! (784·64 + 64·48 + 48·10 multiply-adds), small enough that a plain
//! accumulation loop finishes far inside a frame budget. Accumulation
//! order is fixed (ascending input index), so results are bit-for-bit
//! reproducible across calls and threads.

use crate::error::{ScrawlError, ScrawlResult};

// =============================================================================
// Dense transform
// =============================================================================

/// Dense (fully-connected) transform: `out[i] = Σ_j input[j]·weights[j][i] + bias[i]`.
///
/// `weights` is flat row-major `[in_features × out_features]` — row index is
/// the *input* unit, matching the layout the weight-export tool emits.
///
/// Every slice length is validated against the declared feature counts;
/// a mismatch is reported as `MalformedWeights` for the parameter slices
/// (`layer` filled in by the caller) and `ShapeMismatch` for the input.
pub fn dense_forward(
    input: &[f32],
    weights: &[f32],
    bias: &[f32],
    in_features: usize,
    out_features: usize,
    layer: usize,
    output: &mut [f32],
) -> ScrawlResult<()> {
    if input.len() != in_features {
        return Err(ScrawlError::ShapeMismatch {
            expected: in_features,
            actual: input.len(),
        });
    }
    if weights.len() != in_features * out_features {
        return Err(ScrawlError::MalformedWeights {
            layer,
            expected: in_features * out_features,
            actual: weights.len(),
        });
    }
    if bias.len() != out_features {
        return Err(ScrawlError::MalformedWeights {
            layer,
            expected: out_features,
            actual: bias.len(),
        });
    }
    if output.len() != out_features {
        return Err(ScrawlError::ShapeMismatch {
            expected: out_features,
            actual: output.len(),
        });
    }

    for i in 0..out_features {
        let mut acc = 0.0f32;
        for j in 0..in_features {
            acc += input[j] * weights[j * out_features + i];
        }
        acc += bias[i];
        output[i] = acc;
    }
    Ok(())
}

// =============================================================================
// Activations
// =============================================================================

/// Rectified-linear activation, in place: `x = max(0, x)`.
pub fn relu(data: &mut [f32]) {
    for val in data.iter_mut() {
        if *val < 0.0 {
            *val = 0.0;
        }
    }
}

// =============================================================================
// Argmax
// =============================================================================

/// Index of the maximum value. Ties resolve to the lowest index.
///
/// Comparison is a strict `>`, so a later equal entry never displaces an
/// earlier one and NaN never wins a comparison.
pub fn argmax(data: &[f32]) -> ScrawlResult<usize> {
    if data.is_empty() {
        return Err(ScrawlError::ShapeMismatch {
            expected: 1,
            actual: 0,
        });
    }

    let mut max_idx = 0;
    let mut max_val = data[0];
    for (i, &val) in data.iter().enumerate().skip(1) {
        if val > max_val {
            max_val = val;
            max_idx = i;
        }
    }
    Ok(max_idx)
}
