use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identity of a vehicle. Never reused once handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub u64);

impl VehicleId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(value: u64) -> Self {
        VehicleId(value)
    }
}

/// Monotonic id source shared by everything that builds vehicles.
///
/// Cloning shares the underlying counter, so an inventory and the forms
/// feeding it can hold the same allocator.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    issued: Arc<AtomicU64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id. The first call returns 1.
    pub fn next(&self) -> VehicleId {
        let id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(id, "allocated vehicle id");
        VehicleId(id)
    }

    /// How many ids have been handed out so far.
    pub fn count(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Start over from zero, for tests that need deterministic ids.
    ///
    /// Vehicles built before the reset keep their ids, so ids issued
    /// afterwards collide with them. Never reset an allocator that an
    /// `Inventory` holding vehicles still draws from.
    pub fn reset(&self) {
        self.issued.store(0, Ordering::SeqCst);
    }
}
