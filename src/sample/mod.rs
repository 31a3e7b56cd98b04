//! Bulk sampling of noise sources into lines and grids.

mod texture;

pub use texture::{sample_grid, sample_grid_par, sample_line, sample_line_par, NoiseGrid, SampleError};
