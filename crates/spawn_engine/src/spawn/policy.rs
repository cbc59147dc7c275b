//! Recycle-or-discard policy for retired objects

use serde::{Deserialize, Serialize};

/// Decides how objects are acquired and how they leave the active set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PoolingPolicy {
    /// Acquire from the pool first; retired objects go back to the pool
    #[default]
    Recycle,
    /// Always create new objects; retired objects are destroyed
    Discard,
}

impl PoolingPolicy {
    /// Map the `use_pooling` flag onto a policy
    pub fn from_use_pooling(use_pooling: bool) -> Self {
        if use_pooling {
            Self::Recycle
        } else {
            Self::Discard
        }
    }

    /// Whether this policy parks retired objects in the pool
    pub fn is_pooling(self) -> bool {
        self == Self::Recycle
    }
}
