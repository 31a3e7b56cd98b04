//! Deterministic procedural-noise generation.
//!
//! This crate produces reproducible pseudo-random scalars from real-valued
//! 1-D or 2-D coordinates and a seed. The coherent variants (value and
//! gradient noise) interpolate hashed lattice values so that nearby
//! coordinates yield similar output; fractal Brownian motion stacks octaves
//! of any coherent source for natural-looking detail. Bulk helpers turn any
//! source into line or grid data, optionally in parallel.
//!
//! Generators are immutable after construction and sampling is pure, so a
//! single instance can be shared across threads without synchronization.

pub mod math;
pub mod noise;
pub mod sample;

mod rng;

pub use noise::{CoherentNoiseSource, Fbm, FbmConfig, GradientNoise, NoiseSource, ValueNoise, WhiteNoise};
pub use sample::{sample_grid, sample_grid_par, sample_line, sample_line_par, NoiseGrid, SampleError};
