//! Debug visualization helpers

pub mod draw;

pub use draw::{DebugDraw, DebugShape};
