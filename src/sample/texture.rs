//! Grid iteration over a noise source.
//!
//! Maps each output cell to a normalized position, samples the source once
//! per cell and collects the results. Cells are fully independent, so the
//! parallel variants split the work with rayon and return bit-identical
//! output to the sequential ones.

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::noise::NoiseSource;

/// Errors reported by the bulk-sampling entry points.
///
/// Dimensions are validated before any sampling starts; no partial results
/// are produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("width must be larger than 0")]
    ZeroWidth,
    #[error("height must be larger than 0")]
    ZeroHeight,
}

/// A row-major grid of sampled noise values.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl NoiseGrid {
    /// Returns the grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the value at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        self.values[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Returns the raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the grid, returning the raw row-major values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Samples a source along a line of `width` cells.
///
/// Sample `i` is taken at position `i / width`.
///
/// # Errors
/// Returns [`SampleError::ZeroWidth`] if `width` is 0.
pub fn sample_line(source: &dyn NoiseSource, width: u32) -> Result<Vec<f64>, SampleError> {
    if width == 0 {
        return Err(SampleError::ZeroWidth);
    }
    debug!("sampling line of {width} cells");

    Ok((0..width)
        .map(|x| source.sample(f64::from(x) / f64::from(width)))
        .collect())
}

/// Parallel version of [`sample_line`]; output is identical.
pub fn sample_line_par(source: &dyn NoiseSource, width: u32) -> Result<Vec<f64>, SampleError> {
    if width == 0 {
        return Err(SampleError::ZeroWidth);
    }
    debug!("sampling line of {width} cells in parallel");

    Ok((0..width)
        .into_par_iter()
        .map(|x| source.sample(f64::from(x) / f64::from(width)))
        .collect())
}

/// Samples a source over a `width` x `height` grid.
///
/// Sample `(x, y)` is taken at position `(x / width, y / height)`.
///
/// # Errors
/// Returns [`SampleError::ZeroWidth`] or [`SampleError::ZeroHeight`] if the
/// corresponding dimension is 0.
pub fn sample_grid(
    source: &dyn NoiseSource,
    width: u32,
    height: u32,
) -> Result<NoiseGrid, SampleError> {
    check_dimensions(width, height)?;
    debug!("sampling {width}x{height} grid");

    let mut values = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            values.push(source.sample_2d(f64::from(x) / f64::from(width), f64::from(y) / f64::from(height)));
        }
    }

    Ok(NoiseGrid {
        width,
        height,
        values,
    })
}

/// Parallel version of [`sample_grid`]; output is identical.
pub fn sample_grid_par(
    source: &dyn NoiseSource,
    width: u32,
    height: u32,
) -> Result<NoiseGrid, SampleError> {
    check_dimensions(width, height)?;
    debug!("sampling {width}x{height} grid in parallel");

    let total = width as u64 * height as u64;
    let values = (0..total)
        .into_par_iter()
        .map(|i| {
            let x = (i % u64::from(width)) as u32;
            let y = (i / u64::from(width)) as u32;
            source.sample_2d(f64::from(x) / f64::from(width), f64::from(y) / f64::from(height))
        })
        .collect();

    Ok(NoiseGrid {
        width,
        height,
        values,
    })
}

fn check_dimensions(width: u32, height: u32) -> Result<(), SampleError> {
    if width == 0 {
        return Err(SampleError::ZeroWidth);
    }
    if height == 0 {
        return Err(SampleError::ZeroHeight);
    }
    Ok(())
}
