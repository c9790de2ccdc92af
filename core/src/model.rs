//! DigitModel: the forward-inference engine.
//!
//! ```text
//! input[784] → dense(784→64) → ReLU → dense(64→48) → ReLU → dense(48→10) → scores[10]
//! ```
//!
//! The model borrows an immutable [`WeightStore`] instead of reaching for
//! ambient globals, so tests can run it against synthetic weight sets.
//! Every call allocates its own activation buffers and returns a fresh
//! score array — no shared mutable state, so concurrent calls over the
//! same store are safe.

use crate::error::{ScrawlError, ScrawlResult};
use crate::math;
use crate::weights::{WeightStore, HIDDEN_1, HIDDEN_2, INPUT_SIZE, NUM_CLASSES};

/// The fixed-topology digit classifier.
///
/// # Lifetime `'w`
/// The model borrows the weight store — the store must outlive the model.
/// In the reference application both live for the whole process.
pub struct DigitModel<'w> {
    store: &'w WeightStore,
}

impl<'w> DigitModel<'w> {
    /// Wrap a validated weight store. The store's dimensions were checked
    /// at construction, so this cannot fail.
    pub fn new(store: &'w WeightStore) -> Self {
        Self { store }
    }

    /// Forward pass: flattened 28×28 bitmap in, raw per-class scores out.
    ///
    /// Rejects any input that is not exactly [`INPUT_SIZE`] values with
    /// `ShapeMismatch` — never truncates, never pads. Layer 3 output is
    /// returned unmodified: no softmax, no normalization. Deterministic
    /// for a given input and weight set.
    pub fn forward(&self, input: &[f32]) -> ScrawlResult<[f32; NUM_CLASSES]> {
        if input.len() != INPUT_SIZE {
            return Err(ScrawlError::ShapeMismatch {
                expected: INPUT_SIZE,
                actual: input.len(),
            });
        }

        let mut layer1 = [0.0f32; HIDDEN_1];
        math::dense_forward(
            input,
            self.store.weights_1(),
            self.store.biases_1(),
            INPUT_SIZE,
            HIDDEN_1,
            1,
            &mut layer1,
        )?;
        math::relu(&mut layer1);

        let mut layer2 = [0.0f32; HIDDEN_2];
        math::dense_forward(
            &layer1,
            self.store.weights_2(),
            self.store.biases_2(),
            HIDDEN_1,
            HIDDEN_2,
            2,
            &mut layer2,
        )?;
        math::relu(&mut layer2);

        let mut scores = [0.0f32; NUM_CLASSES];
        math::dense_forward(
            &layer2,
            self.store.weights_3(),
            self.store.biases_3(),
            HIDDEN_2,
            NUM_CLASSES,
            3,
            &mut scores,
        )?;
        Ok(scores)
    }

    /// Predict the digit class: forward pass + argmax (lowest index wins
    /// ties).
    pub fn predict(&self, input: &[f32]) -> ScrawlResult<usize> {
        let scores = self.forward(input)?;
        math::argmax(&scores)
    }
}
