//! Host rendering boundary
//!
//! The spawn core never draws anything itself. Every visible side effect is
//! forwarded to a [`RenderHost`] supplied by the embedding engine.

pub mod commands;

pub use commands::{CommandRecorder, NullHost, RenderCommand, RenderHost};
