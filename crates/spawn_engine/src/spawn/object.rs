//! Managed object: a single pooled, aging, fading instance
//!
//! An object is Alive while its lifetime is positive, Fading once the
//! lifetime has run out and its alpha is still above zero, and reports
//! retirement on the first tick that starts with alpha at or below zero.

use rand::Rng;

use crate::foundation::math::{Quat, Transform, Vec3, Vec4};
use crate::foundation::collections::AreaId;
use super::config::SpawnRange;
use super::random;

/// Color with byte channels and a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectColor {
    /// Red, green and blue channels
    pub rgb: [u8; 3],
    /// Opacity in `[0, 1]`
    pub alpha: f32,
}

impl ObjectColor {
    /// Opaque color from byte channels
    pub const fn opaque(rgb: [u8; 3]) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Normalized RGBA, alpha clamped to `[0, 1]`
    pub fn to_vec4(&self) -> Vec4 {
        let [r, g, b] = self.rgb.map(|c| f32::from(c) / 255.0);
        Vec4::new(r, g, b, self.alpha.clamp(0.0, 1.0))
    }
}

impl Default for ObjectColor {
    fn default() -> Self {
        Self::opaque([255, 255, 255])
    }
}

/// Lifecycle state derived from an object's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectState {
    /// Lifetime remaining
    Alive,
    /// Lifetime spent, alpha decaying
    Fading,
    /// Fully faded, waiting for the area to retire it
    Retired,
    /// Parked in the pool
    Pooled,
}

/// What a single object tick asks of its area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectTick {
    /// Transform changed
    Alive,
    /// Transform and alpha changed
    Fading,
    /// Fully faded; hand back to the area
    Retire,
}

/// One simulated instance owned by a spawn area
#[derive(Debug, Clone)]
pub struct ManagedObject {
    owner: AreaId,
    transform: Transform,
    rotation_rate: Vec3,
    color: ObjectColor,
    remaining_lifetime: f32,
    active: bool,
}

impl ManagedObject {
    /// Create an inactive object owned by `owner`
    pub fn new(owner: AreaId) -> Self {
        Self {
            owner,
            transform: Transform::identity(),
            rotation_rate: Vec3::zeros(),
            color: ObjectColor::default(),
            remaining_lifetime: 0.0,
            active: false,
        }
    }

    /// Advance by `dt` seconds; `fade_rate` is alpha lost per second
    pub fn tick(&mut self, dt: f32, fade_rate: f32) -> ObjectTick {
        let mut outcome = ObjectTick::Alive;

        if self.remaining_lifetime <= 0.0 {
            if !(self.color.alpha > 0.0) {
                return ObjectTick::Retire;
            }
            self.color.alpha -= fade_rate * dt;
            outcome = ObjectTick::Fading;
        }

        self.transform.rotate_euler_degrees(self.rotation_rate * dt);

        // Keeps counting down while fading; reactivation overwrites it.
        self.remaining_lifetime -= dt;

        outcome
    }

    /// Place the object uniformly inside a sphere of `radius`
    pub fn set_random_position<R: Rng + ?Sized>(&mut self, rng: &mut R, radius: f32) {
        self.transform.position = random::point_in_sphere(rng, radius);
    }

    /// Draw each channel from its inclusive range and reset alpha to 1
    pub fn set_random_color<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        red: SpawnRange<u8>,
        green: SpawnRange<u8>,
        blue: SpawnRange<u8>,
    ) {
        self.color = ObjectColor::opaque([
            random::sample_channel(rng, red),
            random::sample_channel(rng, green),
            random::sample_channel(rng, blue),
        ]);
    }

    /// Draw one scale factor and apply it to all three axes
    pub fn set_random_size<R: Rng + ?Sized>(&mut self, rng: &mut R, size: SpawnRange<f32>) {
        self.transform.set_uniform_scale(random::sample_range(rng, size));
    }

    /// Draw a lifetime in seconds
    pub fn set_random_lifetime<R: Rng + ?Sized>(&mut self, rng: &mut R, lifetime: SpawnRange<f32>) {
        self.remaining_lifetime = random::sample_range(rng, lifetime);
    }

    /// Draw a per-axis rotation rate with one shared sign
    pub fn set_random_rotation_rate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rotations_per_sec: SpawnRange<f32>,
    ) {
        self.rotation_rate = random::euler_rotation_rate(rng, rotations_per_sec);
    }

    /// Clear rotation accumulated during a previous life
    pub fn reset_orientation(&mut self) {
        self.transform.rotation = Quat::identity();
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Current lifecycle state
    pub fn state(&self) -> ObjectState {
        if !self.active {
            ObjectState::Pooled
        } else if self.remaining_lifetime > 0.0 {
            ObjectState::Alive
        } else if self.color.alpha > 0.0 {
            ObjectState::Fading
        } else {
            ObjectState::Retired
        }
    }

    /// Whether the object is ticking (not parked)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Area that owns this object
    pub fn owner(&self) -> AreaId {
        self.owner
    }

    /// Local transform relative to the area
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Rotation rate in degrees per second
    pub fn rotation_rate(&self) -> Vec3 {
        self.rotation_rate
    }

    /// Current color and alpha
    pub fn color(&self) -> ObjectColor {
        self.color
    }

    /// Seconds until fading starts (negative once fading)
    pub fn remaining_lifetime(&self) -> f32 {
        self.remaining_lifetime
    }
}
