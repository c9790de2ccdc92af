//! # scrawl-core: digit-inference engine for a drawing canvas
//!
//! The numeric core behind an interactive digit-drawing canvas: a
//! pretrained 784 → 64 → 48 → 10 feedforward network evaluated on a
//! flattened 28×28 intensity grid, once per rendered frame.
//!
//! ## Architecture
//!
//! - **WeightStore**: immutable weight/bias constants, dimension-checked
//!   at load, shared read-only by every call
//! - **DigitModel**: pure forward pass, ReLU on both hidden layers, raw
//!   scores out of the output layer
//! - **Score normalization**: per-call min/max rescale into [0, 1] for
//!   the confidence bars
//! - **Grid flatten**: row-major reshape of the 28×28 canvas snapshot
//!
//! ## Usage
//!
//! ```no_run
//! use scrawl_core::*;
//!
//! let store = WeightStore::embedded()?;
//! let model = DigitModel::new(&store);
//!
//! let grid: Grid = [[0.0; GRID_SIDE]; GRID_SIDE];
//! let scores = model.forward(&flatten(&grid))?;
//! let bars = normalize(&scores);
//! let digit = predicted_class(&scores);
//! # Ok::<(), scrawl_core::ScrawlError>(())
//! ```
//!
//! The UI shell (window, painting, bars) lives outside this crate and
//! calls these entry points with its own grid snapshot each frame.

pub mod error;
pub mod grid;
pub mod math;
pub mod model;
pub mod scores;
pub mod weights;

pub use error::{ScrawlError, ScrawlResult};
pub use grid::{flatten, Grid, GRID_SIDE};
pub use model::DigitModel;
pub use scores::{normalize, predicted_class, DEGENERATE_SCORE};
pub use weights::{WeightStore, HIDDEN_1, HIDDEN_2, INPUT_SIZE, NUM_CLASSES};
