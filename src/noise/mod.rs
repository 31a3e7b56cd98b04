//! Noise generators and the capabilities they expose.
//!
//! [`WhiteNoise`] hashes coordinates directly; [`ValueNoise`] and
//! [`GradientNoise`] interpolate hashed lattice values for spatial
//! coherence; [`Fbm`] stacks octaves of any coherent source.

mod fbm;
mod gradient;
mod source;
mod value;
mod white;

pub use fbm::{Fbm, FbmConfig};
pub use gradient::GradientNoise;
pub use source::{CoherentNoiseSource, NoiseSource};
pub use value::ValueNoise;
pub use white::WhiteNoise;
