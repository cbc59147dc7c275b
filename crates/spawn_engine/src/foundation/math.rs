//! Math utilities and types
//!
//! Provides the small set of nalgebra types the spawn core needs for
//! positions, rotations and colors.

pub use nalgebra::{Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the same scale factor on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::new(scale, scale, scale);
    }

    /// Rotate in local space by euler angles given in degrees.
    ///
    /// Angles are applied Z first, then X, then Y.
    pub fn rotate_euler_degrees(&mut self, euler: Vec3) {
        self.rotation *= euler_degrees_to_quat(euler);
    }
}

/// Build a rotation from euler angles in degrees (Z, then X, then Y)
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    let radians = euler * constants::DEG_TO_RAD;
    Quat::from_axis_angle(&Vec3::y_axis(), radians.y)
        * Quat::from_axis_angle(&Vec3::x_axis(), radians.x)
        * Quat::from_axis_angle(&Vec3::z_axis(), radians.z)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Degrees in one full rotation
    pub const DEGREES_PER_ROTATION: f32 = 360.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_euler_is_identity() {
        let q = euler_degrees_to_quat(Vec3::zeros());
        assert_relative_eq!(q.angle(), 0.0);
    }

    #[test]
    fn test_single_axis_rotation() {
        let q = euler_degrees_to_quat(Vec3::new(0.0, 90.0, 0.0));
        let rotated = q * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_accumulates() {
        let mut transform = Transform::identity();
        transform.rotate_euler_degrees(Vec3::new(0.0, 0.0, 45.0));
        transform.rotate_euler_degrees(Vec3::new(0.0, 0.0, 45.0));
        assert_relative_eq!(transform.rotation.angle(), constants::PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_uniform_scale() {
        let mut transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        transform.set_uniform_scale(1.5);
        assert_eq!(transform.scale, Vec3::new(1.5, 1.5, 1.5));
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
    }
}
