//! Spawn area configuration
//!
//! Every field is immutable once an area has been initialized, apart from the
//! pooling flag which can be switched at runtime through the area itself.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use super::error::SpawnError;

/// Smallest allowed spawn sphere radius
pub const MIN_RADIUS: f32 = 5.0;

/// Smallest allowed object size
pub const MIN_SIZE: f32 = 0.1;

/// Smallest allowed object lifetime (seconds)
pub const MIN_LIFETIME: f32 = 1.0;

/// Extra parked objects created on top of the target count
pub const DEFAULT_POOL_BUFFER: u32 = 10;

/// Inclusive `[min, max]` range a value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange<T> {
    /// Lower bound (inclusive)
    pub min: T,
    /// Upper bound (inclusive)
    pub max: T,
}

impl<T: Copy + PartialOrd> SpawnRange<T> {
    /// Create a new range
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Range that always yields `value`
    pub const fn fixed(value: T) -> Self {
        Self { min: value, max: value }
    }

    /// Whether `min <= max`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Configuration for a [`SpawnArea`](super::SpawnArea)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnAreaConfig {
    /// Radius of the spawn sphere
    pub radius: f32,

    /// Area rotation speed per axis (rotations per second)
    pub area_rotations_per_sec: SpawnRange<f32>,

    /// Number of simultaneously active objects
    pub target_count: u32,

    /// Parked objects created beyond `target_count` at startup
    pub pool_buffer: u32,

    /// Alpha lost per second once an object's lifetime expires
    pub fade_rate: f32,

    /// Object rotation speed per axis (rotations per second)
    pub rotations_per_sec: SpawnRange<f32>,

    /// Object lifetime before fading starts (seconds)
    pub lifetime: SpawnRange<f32>,

    /// Red channel range
    pub red: SpawnRange<u8>,

    /// Green channel range
    pub green: SpawnRange<u8>,

    /// Blue channel range
    pub blue: SpawnRange<u8>,

    /// Uniform object scale
    pub size: SpawnRange<f32>,

    /// Recycle retired objects through the pool instead of destroying them
    pub use_pooling: bool,

    /// Emit a wireframe sphere of the spawn bounds to the debug drawer
    pub draw_bounds: bool,

    /// Seed for the area's random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SpawnAreaConfig {
    fn default() -> Self {
        Self {
            radius: 40.0,
            area_rotations_per_sec: SpawnRange::new(0.0, 0.2),
            target_count: 1500,
            pool_buffer: DEFAULT_POOL_BUFFER,
            fade_rate: 0.5,
            rotations_per_sec: SpawnRange::new(0.0, 1.0),
            lifetime: SpawnRange::new(4.0, 20.0),
            red: SpawnRange::new(0, 255),
            green: SpawnRange::new(0, 255),
            blue: SpawnRange::new(0, 255),
            size: SpawnRange::new(0.5, 2.0),
            use_pooling: true,
            draw_bounds: true,
            seed: None,
        }
    }
}

impl Config for SpawnAreaConfig {}

impl SpawnAreaConfig {
    /// Check every bound; the first violation is reported
    pub fn validate(&self) -> Result<(), SpawnError> {
        if !(self.radius >= MIN_RADIUS) {
            return Err(invalid(format!("radius {} is below {MIN_RADIUS}", self.radius)));
        }
        if !self.radius.is_finite() {
            return Err(invalid(format!("radius {} is not finite", self.radius)));
        }
        if self.target_count < 1 {
            return Err(invalid("target_count must be at least 1"));
        }
        if !(self.fade_rate >= 0.0 && self.fade_rate.is_finite()) {
            return Err(invalid(format!("fade_rate {} is not a finite rate", self.fade_rate)));
        }

        check_float_range("area_rotations_per_sec", self.area_rotations_per_sec, 0.0)?;
        check_float_range("rotations_per_sec", self.rotations_per_sec, 0.0)?;
        check_float_range("lifetime", self.lifetime, MIN_LIFETIME)?;
        check_float_range("size", self.size, MIN_SIZE)?;

        for (name, range) in [("red", self.red), ("green", self.green), ("blue", self.blue)] {
            if !range.is_ordered() {
                return Err(invalid(format!("{name} min {} exceeds max {}", range.min, range.max)));
            }
        }

        Ok(())
    }

    /// Total objects created at initialization
    pub fn initial_capacity(&self) -> usize {
        self.target_count as usize + self.pool_buffer as usize
    }
}

fn invalid(message: impl Into<String>) -> SpawnError {
    SpawnError::Config(message.into())
}

fn check_float_range(name: &str, range: SpawnRange<f32>, floor: f32) -> Result<(), SpawnError> {
    if !(range.min >= floor) {
        return Err(invalid(format!("{name} min {} is below {floor}", range.min)));
    }
    if !range.max.is_finite() {
        return Err(invalid(format!("{name} max {} is not finite", range.max)));
    }
    if !range.is_ordered() {
        return Err(invalid(format!("{name} min {} exceeds max {}", range.min, range.max)));
    }
    Ok(())
}
