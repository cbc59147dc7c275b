//! # Spawn Engine
//!
//! An engine-agnostic spawn area that keeps a population of randomized,
//! rotating objects alive, fades them out when their lifetime ends and
//! either recycles them through a pool or destroys them.
//!
//! ## Features
//!
//! - **Population Control**: active count topped up to a target every tick
//! - **Object Pooling**: FIFO reuse of parked objects, switchable at runtime
//! - **Deterministic Randomness**: injected, seedable random source
//! - **Host Boundary**: all rendering goes through the [`render::RenderHost`] trait
//! - **File Configuration**: `.ron` and `.toml` via [`config::Config`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spawn_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut host = NullHost;
//!     let mut area = SpawnArea::from_config(SpawnAreaConfig::default(), &mut host)?;
//!
//!     let mut clock = FrameClock::fixed(1.0 / 60.0);
//!     for _ in 0..600 {
//!         area.tick(clock.advance(), &mut host);
//!     }
//!     area.shutdown(&mut host);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod spawn;
pub mod render;
pub mod debug;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        debug::DebugDraw,
        foundation::{
            collections::ObjectHandle,
            math::{Transform, Vec3, Vec4},
            time::FrameClock,
        },
        render::{CommandRecorder, NullHost, RenderCommand, RenderHost},
        spawn::{
            ManagedObject, ObjectState, PoolingPolicy, SpawnArea, SpawnAreaConfig, SpawnError,
            SpawnRange, SpawnStats,
        },
    };
}
