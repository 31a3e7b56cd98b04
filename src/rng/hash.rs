//! Deterministic coordinate hashing.
//!
//! Maps a coordinate (or lattice index) and a per-instance mutator to a
//! pseudo-random scalar in an arbitrary range. The combined input is run
//! through a 64-bit avalanching finalizer over its bit pattern, so adjacent
//! lattice indices produce uncorrelated values with no visible banding.

use glam::DVec2;

/// Offset applied to an all-zero input before combining.
///
/// A zero coordinate would collapse the product/dot to zero for every
/// mutator, making the output independent of the seed.
const ZERO_GUARD: f64 = 74_215.806_31;
const ZERO_GUARD_2D: DVec2 = DVec2::new(51_338.472_09, 29_660.915_77);

/// Purpose offsets for deriving the per-instance mutators from the seed.
const SCALAR_PURPOSE: f64 = 17.0;
const VECTOR_X_PURPOSE: f64 = 31.0;
const VECTOR_Y_PURPOSE: f64 = 59.0;

/// Per-component offsets for the vector-valued output, so the two
/// components never share a mutator.
const COMPONENT_X_OFFSET: DVec2 = DVec2::new(12_893.554_17, 78_201.339_06);
const COMPONENT_Y_OFFSET: DVec2 = DVec2::new(64_772.180_93, 20_155.467_38);

/// Seeded random-number source for noise generation.
///
/// The mutator constants are derived once from the seed at construction;
/// afterwards every call is a pure function of its inputs, so a single
/// instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct NoiseRng {
    scalar_mutator: f64,
    vector_mutator: DVec2,
}

impl NoiseRng {
    /// Creates a new random-number source from a seed.
    ///
    /// Two instances built from the same seed produce bit-identical output
    /// for the same inputs.
    pub fn new(seed: f64) -> Self {
        Self {
            scalar_mutator: derive_mutator(seed, SCALAR_PURPOSE),
            vector_mutator: DVec2::new(
                derive_mutator(seed, VECTOR_X_PURPOSE),
                derive_mutator(seed, VECTOR_Y_PURPOSE),
            ),
        }
    }

    /// Hashes a scalar input to a value in `[0, 1]`.
    #[inline]
    pub fn scalar(&self, value: f64) -> f64 {
        mix_scalar(value, self.scalar_mutator, 0.0, 1.0)
    }

    /// Hashes a scalar input to a value in `[min, max]`.
    #[inline]
    pub fn scalar_in(&self, value: f64, min: f64, max: f64) -> f64 {
        mix_scalar(value, self.scalar_mutator, min, max)
    }

    /// Hashes a 2-D position, treated as a single composite key, to a value
    /// in `[0, 1]`.
    #[inline]
    pub fn scalar_2d(&self, position: DVec2) -> f64 {
        mix_vec2(position, self.vector_mutator, 0.0, 1.0)
    }

    /// Hashes a 2-D position to a vector with both components in
    /// `[min, max]`.
    ///
    /// Each component uses an independently offset mutator, so the pair is
    /// neither identical nor trivially correlated.
    #[inline]
    pub fn vector_2d_in(&self, position: DVec2, min: f64, max: f64) -> DVec2 {
        DVec2::new(
            mix_vec2(position, self.vector_mutator + COMPONENT_X_OFFSET, min, max),
            mix_vec2(position, self.vector_mutator + COMPONENT_Y_OFFSET, min, max),
        )
    }
}

/// Derives a mutator constant from the seed at a fixed purpose offset.
///
/// Mutators are kept well away from zero so the input product never
/// degenerates.
fn derive_mutator(seed: f64, purpose: f64) -> f64 {
    mix_scalar(seed, purpose, 4_096.0, 1_048_576.0)
}

fn mix_scalar(value: f64, mutator: f64, min: f64, max: f64) -> f64 {
    let value = if value == 0.0 { ZERO_GUARD } else { value };
    min + unit_fraction(mix64((value * mutator).to_bits())) * (max - min)
}

fn mix_vec2(position: DVec2, mutator: DVec2, min: f64, max: f64) -> f64 {
    let position = if position.x == 0.0 && position.y == 0.0 {
        ZERO_GUARD_2D
    } else {
        position
    };
    min + unit_fraction(mix64(position.dot(mutator).to_bits())) * (max - min)
}

/// 64-bit avalanching finalizer (splitmix64 constants).
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Takes the top 53 bits of a hash as a fraction in `[0, 1)`.
#[inline]
fn unit_fraction(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
