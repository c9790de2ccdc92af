//! Score normalization for display.
//!
//! Raw layer-3 scores are relative magnitudes, not probabilities. For the
//! confidence bars they are rescaled per call so the current minimum maps
//! to 0.0 and the current maximum to 1.0. This is display calibration
//! only — the predicted class is the argmax of either vector, since the
//! rescale preserves ordering.

use crate::math;
use crate::weights::NUM_CLASSES;

/// Fallback value when all ten raw scores are identical and the min/max
/// range collapses to zero. A constant mid-bar keeps the display sane and
/// never lets a NaN or infinity escape the division.
pub const DEGENERATE_SCORE: f32 = 0.5;

/// Rescale raw scores into [0, 1] using the vector's own min and max.
///
/// In the normal case exactly one entry becomes 0.0 (the argmin) and one
/// becomes 1.0 (the argmax), with ordering preserved. In the degenerate
/// all-equal case — possible in principle, not with a trained network —
/// every entry becomes [`DEGENERATE_SCORE`].
pub fn normalize(scores: &[f32; NUM_CLASSES]) -> [f32; NUM_CLASSES] {
    let mut lo = scores[0];
    let mut hi = scores[0];
    for &s in scores.iter().skip(1) {
        if s < lo {
            lo = s;
        }
        if s > hi {
            hi = s;
        }
    }

    let range = hi - lo;
    if range == 0.0 {
        return [DEGENERATE_SCORE; NUM_CLASSES];
    }

    let mut out = [0.0f32; NUM_CLASSES];
    for (o, &s) in out.iter_mut().zip(scores.iter()) {
        *o = (s - lo) / range;
    }
    out
}

/// The digit class a score vector predicts: argmax, lowest index on ties.
pub fn predicted_class(scores: &[f32; NUM_CLASSES]) -> usize {
    // A NUM_CLASSES-sized array is never empty, so argmax cannot fail.
    math::argmax(scores).unwrap_or(0)
}
