//! White noise: direct coordinate hashing, no coherence.

use glam::DVec2;

use super::source::NoiseSource;
use crate::rng::NoiseRng;

/// A white noise generator.
///
/// Every coordinate is hashed independently; two arbitrarily close but
/// distinct positions carry unrelated values. Output is in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: NoiseRng,
}

impl WhiteNoise {
    /// Creates a new white noise generator from a seed.
    pub fn new(seed: f64) -> Self {
        Self {
            rng: NoiseRng::new(seed),
        }
    }
}

impl NoiseSource for WhiteNoise {
    fn sample(&self, position: f64) -> f64 {
        self.rng.scalar(position)
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        // The pair is one composite key into the hash, not two 1-D samples.
        self.rng.scalar_2d(DVec2::new(x, y))
    }
}
