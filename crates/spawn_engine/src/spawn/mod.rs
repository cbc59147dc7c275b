//! Spawn core: population control, pooling and per-object lifecycle

pub mod area;
pub mod config;
pub mod error;
pub mod object;
pub mod policy;
pub mod random;

#[cfg(test)]
mod tests;

pub use area::{randomize_object, SpawnArea, SpawnStats};
pub use crate::foundation::collections::AreaId;
pub use config::{SpawnAreaConfig, SpawnRange};
pub use error::SpawnError;
pub use object::{ManagedObject, ObjectColor, ObjectState, ObjectTick};
pub use policy::PoolingPolicy;
