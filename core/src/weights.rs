//! WeightStore: the fixed numeric constants of the digit network.
//!
//! The store is write-once, read-many. It is constructed exactly once at
//! startup — either from the embedded weight set or from caller-supplied
//! data in tests — validated against the fixed topology, and then only
//! ever read. There is no mutation API, so sharing a `&WeightStore`
//! across threads needs no locking.
//!
//! The weight set itself is the output of the offline training/export
//! tools, consumed here as opaque numeric constants: nested
//! `[inputs][outputs]` float lists rounded to 4 decimal digits.

use log::{debug, error};
use serde::Deserialize;

use crate::error::{ScrawlError, ScrawlResult};

/// Length of the flattened 28×28 input bitmap.
pub const INPUT_SIZE: usize = 784;
/// Units in the first hidden layer.
pub const HIDDEN_1: usize = 64;
/// Units in the second hidden layer.
pub const HIDDEN_2: usize = 48;
/// Output units, one per digit class 0–9.
pub const NUM_CLASSES: usize = 10;

/// The embedded weight set, compiled into the binary. No filesystem
/// access happens at runtime.
const EMBEDDED_WEIGHTS: &str = include_str!("../data/mnist_weights.json");

/// On-disk shape of a weight set: the exact object the export tool prints.
#[derive(Deserialize)]
struct RawWeights {
    weights_1: Vec<Vec<f32>>,
    biases_1: Vec<f32>,
    weights_2: Vec<Vec<f32>>,
    biases_2: Vec<f32>,
    weights_3: Vec<Vec<f32>>,
    biases_3: Vec<f32>,
}

/// Immutable weight/bias constants for the 784 → 64 → 48 → 10 network.
///
/// Matrices are stored flat, row-major `[inputs × outputs]`. All
/// dimensions are checked at construction; a `WeightStore` that exists is
/// internally consistent by definition.
pub struct WeightStore {
    w1: Vec<f32>,
    b1: Vec<f32>,
    w2: Vec<f32>,
    b2: Vec<f32>,
    w3: Vec<f32>,
    b3: Vec<f32>,
}

impl WeightStore {
    /// Load the embedded weight set shipped with the crate.
    ///
    /// Fails with `MalformedWeights` if the embedded data does not parse
    /// or does not match the fixed topology. Either failure is fatal to
    /// startup: the application must refuse to run rather than infer with
    /// corrupt parameters.
    pub fn embedded() -> ScrawlResult<Self> {
        let raw: RawWeights = serde_json::from_str(EMBEDDED_WEIGHTS).map_err(|e| {
            error!("embedded weight set failed to parse: {e}");
            ScrawlError::MalformedWeights {
                layer: 1,
                expected: INPUT_SIZE,
                actual: 0,
            }
        })?;
        let store = Self::from_nested(
            raw.weights_1,
            raw.biases_1,
            raw.weights_2,
            raw.biases_2,
            raw.weights_3,
            raw.biases_3,
        )?;
        debug!(
            "loaded embedded weight set: {} parameters",
            store.w1.len()
                + store.b1.len()
                + store.w2.len()
                + store.b2.len()
                + store.w3.len()
                + store.b3.len()
        );
        Ok(store)
    }

    /// Build a store from nested `[inputs][outputs]` matrices and bias
    /// vectors, validating every dimension against the fixed topology.
    pub fn from_nested(
        weights_1: Vec<Vec<f32>>,
        biases_1: Vec<f32>,
        weights_2: Vec<Vec<f32>>,
        biases_2: Vec<f32>,
        weights_3: Vec<Vec<f32>>,
        biases_3: Vec<f32>,
    ) -> ScrawlResult<Self> {
        let w1 = flatten_matrix(weights_1, INPUT_SIZE, HIDDEN_1, 1)?;
        let b1 = check_bias(biases_1, HIDDEN_1, 1)?;
        let w2 = flatten_matrix(weights_2, HIDDEN_1, HIDDEN_2, 2)?;
        let b2 = check_bias(biases_2, HIDDEN_2, 2)?;
        let w3 = flatten_matrix(weights_3, HIDDEN_2, NUM_CLASSES, 3)?;
        let b3 = check_bias(biases_3, NUM_CLASSES, 3)?;
        Ok(Self {
            w1,
            b1,
            w2,
            b2,
            w3,
            b3,
        })
    }

    /// Layer-1 weight matrix, flat row-major `[784 × 64]`.
    pub fn weights_1(&self) -> &[f32] {
        &self.w1
    }

    /// Layer-1 bias vector, 64 entries.
    pub fn biases_1(&self) -> &[f32] {
        &self.b1
    }

    /// Layer-2 weight matrix, flat row-major `[64 × 48]`.
    pub fn weights_2(&self) -> &[f32] {
        &self.w2
    }

    /// Layer-2 bias vector, 48 entries.
    pub fn biases_2(&self) -> &[f32] {
        &self.b2
    }

    /// Layer-3 weight matrix, flat row-major `[48 × 10]`.
    pub fn weights_3(&self) -> &[f32] {
        &self.w3
    }

    /// Layer-3 bias vector, 10 entries.
    pub fn biases_3(&self) -> &[f32] {
        &self.b3
    }
}

/// Flatten a nested `[rows][cols]` matrix, rejecting wrong row counts and
/// ragged rows.
fn flatten_matrix(
    nested: Vec<Vec<f32>>,
    rows: usize,
    cols: usize,
    layer: usize,
) -> ScrawlResult<Vec<f32>> {
    if nested.len() != rows {
        error!(
            "layer {layer} weight matrix has {} rows, expected {rows}",
            nested.len()
        );
        return Err(ScrawlError::MalformedWeights {
            layer,
            expected: rows,
            actual: nested.len(),
        });
    }
    let mut flat = Vec::with_capacity(rows * cols);
    for row in &nested {
        if row.len() != cols {
            error!(
                "layer {layer} weight matrix has a row of {} values, expected {cols}",
                row.len()
            );
            return Err(ScrawlError::MalformedWeights {
                layer,
                expected: cols,
                actual: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }
    Ok(flat)
}

fn check_bias(bias: Vec<f32>, len: usize, layer: usize) -> ScrawlResult<Vec<f32>> {
    if bias.len() != len {
        error!("layer {layer} bias vector has {} values, expected {len}", bias.len());
        return Err(ScrawlError::MalformedWeights {
            layer,
            expected: len,
            actual: bias.len(),
        });
    }
    Ok(bias)
}
