//! Value noise: hashed lattice corners, eased interpolation.

use glam::DVec2;

use super::source::{CoherentNoiseSource, NoiseSource};
use crate::math::{ease, fract, lerp};
use crate::rng::NoiseRng;

/// A value noise generator.
///
/// The coordinate is scaled into a lattice of cells; each integer corner
/// hashes to a value in `[0, 1]` and the cell interior interpolates between
/// the corners with an eased fraction. Corners shared between adjacent
/// cells hash identically, which makes the output continuous across cell
/// boundaries.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    cell_count: DVec2,
    rng: NoiseRng,
}

impl ValueNoise {
    /// Creates a new value noise generator.
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
}

impl NoiseSource for ValueNoise {
    /// Samples at `position` using the configured cell count. Output is in
    /// `[0, 1]`.
    fn sample(&self, position: f64) -> f64 {
        self.sample_coherent(position, self.cell_count.x)
    }

    /// Samples at `(x, y)` using the configured cell counts. Output is in
    /// `[0, 1]`.
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.sample_coherent_2d(x, y, self.cell_count.x, self.cell_count.y)
    }
}

impl CoherentNoiseSource for ValueNoise {
    fn sample_coherent(&self, position: f64, frequency: f64) -> f64 {
        let scaled = position * frequency;
        let cell = scaled.floor();
        let t = fract(scaled);

        let left = self.rng.scalar(cell);
        let right = self.rng.scalar(cell + 1.0);

        lerp(left, right, ease(t))
    }

    fn sample_coherent_2d(&self, x: f64, y: f64, frequency_x: f64, frequency_y: f64) -> f64 {
        let scaled = DVec2::new(x * frequency_x, y * frequency_y);
        let cell = scaled.floor();
        let t = scaled - cell;

        let bottom_left = self.rng.scalar_2d(cell);
        let bottom_right = self.rng.scalar_2d(cell + DVec2::new(1.0, 0.0));
        let top_left = self.rng.scalar_2d(cell + DVec2::new(0.0, 1.0));
        let top_right = self.rng.scalar_2d(cell + DVec2::new(1.0, 1.0));

        let tx = ease(t.x);
        let ty = ease(t.y);

        let bottom = lerp(bottom_left, bottom_right, tx);
        let top = lerp(top_left, top_right, tx);
        lerp(bottom, top, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_range() {
        let noise = ValueNoise::new(18_493.293_12, 8.0, 8.0);
        let mut sweep = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            let x: f64 = sweep.gen_range(-100.0..100.0);
            let y: f64 = sweep.gen_range(-100.0..100.0);
            let v = noise.sample(x);
            assert!((0.0..=1.0).contains(&v), "1-D value {v} at {x} out of range");
            let v = noise.sample_2d(x, y);
            assert!((0.0..=1.0).contains(&v), "2-D value {v} at ({x}, {y}) out of range");
        }
    }

    #[test]
    fn test_determinism_across_instances() {
        let a = ValueNoise::new(777.125, 4.0, 6.0);
        let b = ValueNoise::new(777.125, 4.0, 6.0);
        for i in 0..200 {
            let p = i as f64 * 0.013 - 1.3;
            assert_eq!(a.sample(p), b.sample(p));
            assert_eq!(a.sample_2d(p, p * 2.0), b.sample_2d(p, p * 2.0));
        }
    }

    #[test]
    fn test_corner_agreement() {
        // The lattice point n is the right corner of cell [n-1, n] and the
        // left corner of cell [n, n+1]; both views must hash to the same
        // value or the noise would jump at every boundary.
        let noise = ValueNoise::new(41.5, 1.0, 1.0);
        for n in -10..=10 {
            let n = n as f64;
            let from_left_cell = noise.sample_coherent(n - 1e-12, 1.0);
            let at_corner = noise.sample_coherent(n, 1.0);
            assert!(
                (from_left_cell - at_corner).abs() < 1e-9,
                "discontinuity at lattice point {n}"
            );
        }
    }

    #[test]
    fn test_continuity_at_boundaries() {
        let noise = ValueNoise::new(96.75, 1.0, 1.0);
        for n in [-3.0, 0.0, 2.0, 17.0] {
            let at = noise.sample_coherent(n, 1.0);
            for eps in [1e-6, 1e-9] {
                let below = noise.sample_coherent(n - eps, 1.0);
                let above = noise.sample_coherent(n + eps, 1.0);
                assert!((below - at).abs() < 1e-4, "jump below lattice point {n}");
                assert!((above - at).abs() < 1e-4, "jump above lattice point {n}");
            }
        }
    }

    #[test]
    fn test_negative_coordinates_use_floor_cells() {
        // A fraction computed by truncation would fall outside [0, 1) for
        // negative positions and push the interpolation out of range.
        let noise = ValueNoise::new(12.5, 8.0, 8.0);
        for i in 1..400 {
            let p = -(i as f64) * 0.031;
            let v = noise.sample(p);
            assert!((0.0..=1.0).contains(&v), "value {v} at {p} out of range");
        }
    }

    #[test]
    fn test_origin_sample_collapses_to_corner_hash() {
        // At (0, 0) the fraction is zero in both axes, so the bilinear
        // interpolation collapses to the hashed bottom-left corner exactly.
        let seed = 18_493.293_12;
        let noise = ValueNoise::new(seed, 8.0, 8.0);
        let expected = NoiseRng::new(seed).scalar_2d(DVec2::ZERO);
        assert_eq!(noise.sample_2d(0.0, 0.0), expected);
    }

    #[test]
    fn test_explicit_frequency_overrides_cell_count() {
        let noise = ValueNoise::new(5.5, 8.0, 8.0);
        // With frequency 16 the point 0.25 lands on lattice point 4, which
        // the configured frequency of 8 places mid-cell instead.
        assert_ne!(noise.sample(0.25), noise.sample_coherent(0.25, 16.0));
        assert_eq!(noise.sample(0.25), noise.sample_coherent(0.25, 8.0));
    }
}
