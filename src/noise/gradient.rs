//! Gradient (Perlin) noise: hashed lattice slopes and dot products.

use glam::DVec2;

use super::source::{CoherentNoiseSource, NoiseSource};
use crate::math::{ease, fract, inverse_lerp, lerp};
use crate::rng::NoiseRng;

/// Peak magnitude of the raw 1-D output (`sqrt(1) / 2`).
const MAX_MAGNITUDE_1D: f64 = 0.5;
/// Peak magnitude of the raw 2-D output (`sqrt(2) / 2`).
const MAX_MAGNITUDE_2D: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// A gradient noise generator.
///
/// Each lattice corner hashes to a slope (1-D) or gradient vector (2-D);
/// the corner's contribution is that gradient projected on the offset from
/// the corner to the sample point, so it is zero at the corner itself and
/// grows linearly away from it. Contributions are interpolated across the
/// cell and the result is remapped from the theoretical peak range into
/// `[0, 1]`.
///
/// The peak range is a derived bound, not a measured one: hashed gradients
/// shorter than the unit diagonal cannot reach it, while eased 2-D
/// interpolation can slightly overshoot near cell interiors. Samples may
/// therefore land marginally outside `[0, 1]`; they are not clamped.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    cell_count: DVec2,
    rng: NoiseRng,
}

impl GradientNoise {
    /// Creates a new gradient noise generator.
    ///
    /// # Arguments
    /// * `seed` - Seed for the random number source
    /// * `cell_count_x` - Lattice cells per unit on the x-axis
    /// * `cell_count_y` - Lattice cells per unit on the y-axis
    pub fn new(seed: f64, cell_count_x: f64, cell_count_y: f64) -> Self {
        Self {
            cell_count: DVec2::new(cell_count_x, cell_count_y),
            rng: NoiseRng::new(seed),
        }
    }

    /// Contribution of one cell corner: its hashed gradient projected on
    /// the offset from the corner to the sample point.
    fn corner_contribution(&self, cell: DVec2, corner: DVec2, t: DVec2) -> f64 {
        let gradient = self.rng.vector_2d_in(cell + corner, -1.0, 1.0);
        gradient.dot(t - corner)
    }
}

impl NoiseSource for GradientNoise {
    /// Samples at `position` using the configured cell count.
    fn sample(&self, position: f64) -> f64 {
        self.sample_coherent(position, self.cell_count.x)
    }

    /// Samples at `(x, y)` using the configured cell counts.
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.sample_coherent_2d(x, y, self.cell_count.x, self.cell_count.y)
    }
}

impl CoherentNoiseSource for GradientNoise {
    fn sample_coherent(&self, position: f64, frequency: f64) -> f64 {
        let scaled = position * frequency;
        let cell = scaled.floor();
        let t = fract(scaled);

        let left_slope = self.rng.scalar_in(cell, -1.0, 1.0);
        let right_slope = self.rng.scalar_in(cell + 1.0, -1.0, 1.0);

        // Each corner's line through zero, evaluated at the sample point.
        let left = left_slope * t;
        let right = right_slope * (t - 1.0);

        let value = lerp(left, right, t);
        inverse_lerp(-MAX_MAGNITUDE_1D, MAX_MAGNITUDE_1D, value)
    }

    fn sample_coherent_2d(&self, x: f64, y: f64, frequency_x: f64, frequency_y: f64) -> f64 {
        let scaled = DVec2::new(x * frequency_x, y * frequency_y);
        let cell = scaled.floor();
        let t = scaled - cell;

        let bottom_left = self.corner_contribution(cell, DVec2::new(0.0, 0.0), t);
        let bottom_right = self.corner_contribution(cell, DVec2::new(1.0, 0.0), t);
        let top_left = self.corner_contribution(cell, DVec2::new(0.0, 1.0), t);
        let top_right = self.corner_contribution(cell, DVec2::new(1.0, 1.0), t);

        let tx = ease(t.x);
        let ty = ease(t.y);

        let bottom = lerp(bottom_left, bottom_right, tx);
        let top = lerp(top_left, top_right, tx);
        let value = lerp(bottom, top, ty);

        inverse_lerp(-MAX_MAGNITUDE_2D, MAX_MAGNITUDE_2D, value)
    }
}
