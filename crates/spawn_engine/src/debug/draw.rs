//! Debug drawing primitives
//!
//! Shapes are collected per frame and handed to whatever overlay the host
//! engine provides; nothing here renders.

use crate::foundation::math::{Vec3, Vec4};

/// Default color for spawn bounds (yellow)
pub const BOUNDS_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Debug shape primitives that can be handed to a host overlay
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Sphere at center with radius
    Sphere {
        /// Sphere center in area-parent space
        center: Vec3,
        /// Sphere radius
        radius: f32,
        /// RGBA color
        color: Vec4,
        /// Draw edges only
        wireframe: bool,
    },
}

/// Per-frame collection of debug shapes
#[derive(Debug, Default)]
pub struct DebugDraw {
    shapes: Vec<DebugShape>,
}

impl DebugDraw {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a wireframe sphere
    pub fn wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec4) {
        self.shapes.push(DebugShape::Sphere {
            center,
            radius,
            color,
            wireframe: true,
        });
    }

    /// Shapes queued this frame
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Drop all queued shapes
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
