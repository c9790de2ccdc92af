//! Python bindings for scrawl-core via PyO3.
//!
//! The drawing UI is a Python program; it owns the canvas grid and calls
//! into the core once per frame. Everything here is a thin shim: convert
//! Python lists, call the pure core entry points, map core errors to
//! `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use scrawl_core::{
    flatten as flatten_grid, normalize as normalize_scores, predicted_class, DigitModel, Grid,
    ScrawlError, WeightStore, GRID_SIDE, NUM_CLASSES,
};

fn to_py_err(e: ScrawlError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_score_array(scores: Vec<f32>) -> PyResult<[f32; NUM_CLASSES]> {
    let len = scores.len();
    scores
        .try_into()
        .map_err(|_| to_py_err(ScrawlError::ShapeMismatch {
            expected: NUM_CLASSES,
            actual: len,
        }))
}

/// The digit classifier, holding the embedded weight set.
#[pyclass]
pub struct PyDigitModel {
    store: WeightStore,
}

#[pymethods]
impl PyDigitModel {
    /// Load the weight set embedded in the native library.
    #[new]
    fn new() -> PyResult<Self> {
        let store = WeightStore::embedded().map_err(to_py_err)?;
        Ok(Self { store })
    }

    /// Forward pass: 784 flattened intensities in, 10 raw scores out.
    fn forward(&self, input: Vec<f32>) -> PyResult<Vec<f32>> {
        let model = DigitModel::new(&self.store);
        let scores = model.forward(&input).map_err(to_py_err)?;
        Ok(scores.to_vec())
    }

    /// Predicted digit class: forward + argmax, lowest index wins ties.
    fn predict(&self, input: Vec<f32>) -> PyResult<usize> {
        let model = DigitModel::new(&self.store);
        model.predict(&input).map_err(to_py_err)
    }
}

/// Row-major flatten of a 28×28 grid of intensities.
#[pyfunction]
fn flatten(grid: Vec<Vec<f32>>) -> PyResult<Vec<f32>> {
    if grid.len() != GRID_SIDE {
        return Err(to_py_err(ScrawlError::ShapeMismatch {
            expected: GRID_SIDE,
            actual: grid.len(),
        }));
    }
    let mut fixed: Grid = [[0.0; GRID_SIDE]; GRID_SIDE];
    for (row_out, row_in) in fixed.iter_mut().zip(grid.iter()) {
        if row_in.len() != GRID_SIDE {
            return Err(to_py_err(ScrawlError::ShapeMismatch {
                expected: GRID_SIDE,
                actual: row_in.len(),
            }));
        }
        row_out.copy_from_slice(row_in);
    }
    Ok(flatten_grid(&fixed))
}

/// Rescale 10 raw scores into [0, 1] bar heights.
#[pyfunction]
fn normalize(scores: Vec<f32>) -> PyResult<Vec<f32>> {
    let array = to_score_array(scores)?;
    Ok(normalize_scores(&array).to_vec())
}

/// Argmax of 10 raw scores, lowest index wins ties.
#[pyfunction]
fn predicted_digit(scores: Vec<f32>) -> PyResult<usize> {
    let array = to_score_array(scores)?;
    Ok(predicted_class(&array))
}

#[pymodule]
fn scrawl_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDigitModel>()?;
    m.add_function(wrap_pyfunction!(flatten, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(predicted_digit, m)?)?;
    Ok(())
}
