//! Specialized collection types

use std::sync::atomic::{AtomicU32, Ordering};

use slotmap::new_key_type;

pub use slotmap::SlotMap;

new_key_type! {
    /// Slot in a single area's arena
    pub struct ObjectKey;
}

/// Handle-based arena keyed by [`ObjectKey`]
pub type ObjectArena<T> = SlotMap<ObjectKey, T>;

static NEXT_AREA_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a spawn area, stored on each object and handle it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaId(u32);

impl AreaId {
    pub(crate) fn next() -> Self {
        Self(NEXT_AREA_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Stable handle to an object: the owning area plus its arena slot.
///
/// Slot keys repeat across areas, so the area id is what keeps a handle from
/// one area from resolving in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    area: AreaId,
    key: ObjectKey,
}

impl ObjectHandle {
    pub(crate) const fn new(area: AreaId, key: ObjectKey) -> Self {
        Self { area, key }
    }

    /// Area that issued the handle
    pub fn area(self) -> AreaId {
        self.area
    }

    pub(crate) fn key(self) -> ObjectKey {
        self.key
    }
}
