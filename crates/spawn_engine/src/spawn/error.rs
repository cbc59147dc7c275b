//! Spawn area errors

use crate::foundation::collections::ObjectHandle;

/// Errors raised by a spawn area
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    /// The configuration cannot produce a usable area
    #[error("Invalid spawn configuration: {0}")]
    Config(String),

    /// The object is already parked in the pool
    #[error("Object {0:?} was retired twice")]
    DoubleRetire(ObjectHandle),

    /// The handle does not refer to an object owned by this area
    #[error("Unknown object {0:?}")]
    UnknownObject(ObjectHandle),
}
