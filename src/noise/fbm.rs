//! Fractal Brownian motion: octave stacking over a coherent source.

use serde::{Deserialize, Serialize};

use super::source::{CoherentNoiseSource, NoiseSource};
use crate::math::lerp;

/// Configuration for fractal Brownian motion composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FbmConfig {
    /// Number of octaves to accumulate. Zero octaves yield a constant 0.
    pub octaves: u32,
    /// Frequency multiplier per octave (typically > 1).
    pub lacunarity: f64,
    /// Amplitude multiplier per octave (typically in (0, 1)).
    pub gain: f64,
    /// Frequency of the first octave.
    pub initial_frequency: f64,
    /// Amplitude of the first octave.
    pub initial_amplitude: f64,
}

impl Default for FbmConfig {
    fn default() -> Self {
        Self {
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            initial_frequency: 1.0,
            initial_amplitude: 0.5,
        }
    }
}

impl FbmConfig {
    /// Creates a configuration with rolling, low-detail output.
    pub fn smooth() -> Self {
        Self {
            octaves: 3,
            gain: 0.35,
            ..Default::default()
        }
    }

    /// Creates a configuration with pronounced high-frequency detail.
    pub fn rugged() -> Self {
        Self {
            octaves: 8,
            lacunarity: 2.1,
            gain: 0.55,
            ..Default::default()
        }
    }

    /// Sum of all octave amplitudes; the output magnitude never exceeds it.
    pub fn amplitude_sum(&self) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = self.initial_amplitude;
        for _ in 0..self.octaves {
            sum += amplitude.abs();
            amplitude *= self.gain;
        }
        sum
    }
}

/// A fractal Brownian motion generator.
///
/// Wraps a coherent source and sums `octaves` samples of it, each taken at
/// a frequency scaled by `lacunarity` and weighted by an amplitude scaled
/// by `gain`. The wrapped source's `[0, 1]` output is recentered to
/// `[-amplitude, +amplitude]` before accumulation, so the sum is zero-mean
/// and bounded by the amplitude sum rather than `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Fbm<S> {
    source: S,
    config: FbmConfig,
}

impl<S: CoherentNoiseSource> Fbm<S> {
    /// Creates a new fractal generator over a coherent source.
    pub fn new(source: S, config: FbmConfig) -> Self {
        Self { source, config }
    }

    /// Returns the octave configuration.
    pub fn config(&self) -> &FbmConfig {
        &self.config
    }
}

impl<S: CoherentNoiseSource> NoiseSource for Fbm<S> {
    fn sample(&self, position: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = self.config.initial_amplitude;
        let mut frequency = self.config.initial_frequency;

        for _ in 0..self.config.octaves {
            value += lerp(-amplitude, amplitude, self.source.sample_coherent(position, frequency));
            frequency *= self.config.lacunarity;
            amplitude *= self.config.gain;
        }

        value
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = self.config.initial_amplitude;
        let mut frequency = self.config.initial_frequency;

        for _ in 0..self.config.octaves {
            value += lerp(
                -amplitude,
                amplitude,
                self.source.sample_coherent_2d(x, y, frequency, frequency),
            );
            frequency *= self.config.lacunarity;
            amplitude *= self.config.gain;
        }

        value
    }
}
