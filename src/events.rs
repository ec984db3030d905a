//! In-process notifications fired after inventory changes.
//!
//! Listeners receive the affected vehicle as a JSON string. Delivery follows
//! `event_emitter_rs`, which runs each listener on its own thread.

use std::sync::{Arc, Mutex};

use event_emitter_rs::EventEmitter;

use crate::error::InventoryError;
use crate::vehicle::Vehicle;

pub const VEHICLE_ADDED: &str = "VehicleAdded";
pub const VEHICLE_REMOVED: &str = "VehicleRemoved";

/// Shared emitter handle. Clones register on and emit to the same listeners.
#[derive(Clone)]
pub struct InventoryEvents {
    emitter: Arc<Mutex<EventEmitter>>,
}

impl Default for InventoryEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryEvents {
    pub fn new() -> Self {
        InventoryEvents {
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    /// Register a listener; returns the listener id assigned by the emitter.
    pub fn on<F>(&self, event: &str, listener: F) -> Result<String, InventoryError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| InventoryError::LockPoisoned("listen"))?;
        Ok(emitter.on(event, move |payload: String| listener(payload)))
    }

    /// Notify listeners. Runs after the change is already stored, so a
    /// failure here is logged rather than reported to the caller.
    pub(crate) fn emit(&self, event: &str, vehicle: &Vehicle) {
        let payload = match serde_json::to_string(vehicle) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(event, id = vehicle.id().value(), "skipping notification: {}", err);
                return;
            }
        };

        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(event, payload);
            }
            Err(_) => {
                tracing::warn!(event, id = vehicle.id().value(), "skipping notification: emitter lock poisoned");
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let emitter = Arc::clone(&self.emitter);
        let _ = std::thread::spawn(move || {
            let _guard = emitter.lock();
            panic!("poisoning emitter");
        })
        .join();
    }
}
