//! The 28×28 drawing grid and its row-major flattening.
//!
//! The grid itself is owned by the UI shell; the core only ever sees a
//! flattened snapshot of it. `flatten` is a pure reshape — no scaling,
//! the caller keeps intensities in [0, 1].

use crate::weights::INPUT_SIZE;

/// Side length of the square drawing grid.
pub const GRID_SIDE: usize = 28;

/// One frame's snapshot of the drawing canvas: `grid[row][col]`
/// intensities in [0, 1].
pub type Grid = [[f32; GRID_SIDE]; GRID_SIDE];

/// Row-major flatten of the grid into a 784-value input vector.
///
/// `grid[row][col]` lands at index `row * GRID_SIDE + col`. The reshape is
/// bijective: walking the output 28 values at a time reproduces the grid
/// exactly.
pub fn flatten(grid: &Grid) -> Vec<f32> {
    let mut out = Vec::with_capacity(INPUT_SIZE);
    for row in grid.iter() {
        out.extend_from_slice(row);
    }
    out
}
