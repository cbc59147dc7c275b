//! Random attribute sampling
//!
//! All draws go through an injected [`Rng`] so a seeded area replays the same
//! sequence of spawns.

use rand::Rng;

use crate::foundation::math::{constants::DEGREES_PER_ROTATION, Vec3};
use super::config::SpawnRange;

/// Uniform draw in `[min, max]`; a degenerate range returns `min`
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: SpawnRange<f32>) -> f32 {
    if range.max <= range.min {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// Uniform integer channel value, both bounds inclusive
pub fn sample_channel<R: Rng + ?Sized>(rng: &mut R, range: SpawnRange<u8>) -> u8 {
    if range.max <= range.min {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// Uniform point inside a sphere of `radius` centered on the origin.
///
/// Rejection sampling in the bounding cube keeps the volumetric distribution
/// uniform.
pub fn point_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if candidate.norm_squared() <= 1.0 {
            return candidate * radius;
        }
    }
}

/// Euler rotation rate in degrees per second.
///
/// Each axis draws its own magnitude from `rotations_per_sec`; a single coin
/// flip picks the sign for all three axes.
pub fn euler_rotation_rate<R: Rng + ?Sized>(rng: &mut R, rotations_per_sec: SpawnRange<f32>) -> Vec3 {
    let direction = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
    let scale = DEGREES_PER_ROTATION * direction;

    Vec3::new(
        sample_range(rng, rotations_per_sec) * scale,
        sample_range(rng, rotations_per_sec) * scale,
        sample_range(rng, rotations_per_sec) * scale,
    )
}
