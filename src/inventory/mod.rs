//! Inventory - the ordered, in-memory collection of vehicles.
//!
//! Insertion order is the listing order. The inventory is clone-friendly:
//! clones share the same storage and allocator through `Arc`.
//!
//! ## Example
//!
//! ```ignore
//! use vehicle_inventory::{Inventory, VehicleSpec};
//!
//! let inventory = Inventory::new();
//! let car = inventory.create(VehicleSpec::car().make("Honda").model("Civic"))?;
//! assert_eq!(inventory.find_by_id(car.id())?, car);
//! let stats = inventory.statistics()?;
//! ```

mod statistics;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::config::InventoryConfig;
use crate::error::InventoryError;
#[cfg(feature = "emitter")]
use crate::events::{InventoryEvents, VEHICLE_ADDED, VEHICLE_REMOVED};
use crate::identity::{IdAllocator, VehicleId};
use crate::money::DEFAULT_CURRENCY_SYMBOL;
use crate::vehicle::{Vehicle, VehicleSpec};

pub use statistics::InventoryStatistics;

#[derive(Clone)]
pub struct Inventory {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
    ids: IdAllocator,
    currency_symbol: String,
    #[cfg(feature = "emitter")]
    events: InventoryEvents,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("ids", &self.ids)
            .field("currency_symbol", &self.currency_symbol)
            .finish_non_exhaustive()
    }
}

impl Inventory {
    /// Create an empty inventory with its own allocator.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new())
    }

    /// Create an empty inventory drawing ids from `ids`.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Inventory {
            vehicles: Arc::new(RwLock::new(Vec::new())),
            ids,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            #[cfg(feature = "emitter")]
            events: InventoryEvents::new(),
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Result<Self, InventoryError> {
        let mut inventory = Self::new();
        inventory.currency_symbol = config.currency_symbol.clone();
        if config.seed_demo_data {
            crate::seed::seed_demo(&inventory)?;
        }
        Ok(inventory)
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.ids
    }

    /// Append a vehicle. The same vehicle added twice is held twice.
    pub fn add(&self, vehicle: Vehicle) -> Result<(), InventoryError> {
        tracing::debug!(id = vehicle.id().value(), kind = vehicle.kind_label(), "adding vehicle");

        #[cfg(feature = "emitter")]
        let added = vehicle.clone();
        {
            let mut vehicles = self
                .vehicles
                .write()
                .map_err(|_| InventoryError::LockPoisoned("write"))?;
            vehicles.push(vehicle);
        }

        #[cfg(feature = "emitter")]
        self.events.emit(VEHICLE_ADDED, &added);

        Ok(())
    }

    /// Build `spec` with this inventory's allocator and add the result.
    /// A spec that fails validation leaves the inventory unchanged.
    pub fn create(&self, spec: VehicleSpec) -> Result<Vehicle, InventoryError> {
        let vehicle = spec.build(&self.ids)?;
        self.add(vehicle.clone())?;
        Ok(vehicle)
    }

    /// Remove the vehicle with `id`. Removing an unknown id is a no-op.
    pub fn remove(&self, id: VehicleId) -> Result<Option<Vehicle>, InventoryError> {
        let removed = {
            let mut vehicles = self
                .vehicles
                .write()
                .map_err(|_| InventoryError::LockPoisoned("write"))?;
            vehicles
                .iter()
                .position(|vehicle| vehicle.id() == id)
                .map(|index| vehicles.remove(index))
        };

        if let Some(vehicle) = &removed {
            tracing::debug!(id = vehicle.id().value(), kind = vehicle.kind_label(), "removed vehicle");
            #[cfg(feature = "emitter")]
            self.events.emit(VEHICLE_REMOVED, vehicle);
        } else {
            tracing::debug!(id = id.value(), "remove skipped, no such vehicle");
        }

        Ok(removed)
    }

    /// Snapshot of every vehicle in insertion order.
    pub fn all(&self) -> Result<Vec<Vehicle>, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        Ok(vehicles.clone())
    }

    pub fn find_by_id(&self, id: VehicleId) -> Result<Vehicle, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        vehicles
            .iter()
            .find(|vehicle| vehicle.id() == id)
            .cloned()
            .ok_or(InventoryError::NotFound { id })
    }

    /// Vehicles matching `predicate`, in insertion order.
    pub fn find<F>(&self, predicate: F) -> Result<Vec<Vehicle>, InventoryError>
    where
        F: Fn(&Vehicle) -> bool,
    {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        Ok(vehicles
            .iter()
            .filter(|vehicle| predicate(vehicle))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> Result<usize, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        Ok(vehicles.len())
    }

    pub fn is_empty(&self) -> Result<bool, InventoryError> {
        Ok(self.len()? == 0)
    }

    /// Count, total and average price, computed fresh on every call.
    pub fn statistics(&self) -> Result<InventoryStatistics, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        InventoryStatistics::from_vehicles(vehicles.iter())
    }

    /// Number of held vehicles per kind label.
    pub fn count_by_kind(&self) -> Result<BTreeMap<&'static str, usize>, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        let mut counts = BTreeMap::new();
        for vehicle in vehicles.iter() {
            *counts.entry(vehicle.kind_label()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Listing lines for every vehicle, using the configured currency symbol.
    pub fn describe_all(&self) -> Result<Vec<String>, InventoryError> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|_| InventoryError::LockPoisoned("read"))?;
        Ok(vehicles
            .iter()
            .map(|vehicle| vehicle.describe_with(&self.currency_symbol))
            .collect())
    }

    /// Listen for `events::VEHICLE_ADDED` or `events::VEHICLE_REMOVED`.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F) -> Result<String, InventoryError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.events.on(event, listener)
    }
}
