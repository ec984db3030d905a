pub mod catalog;
mod config;
mod error;
#[cfg(feature = "emitter")]
pub mod events;
mod identity;
mod intake;
mod inventory;
pub mod money;
pub mod seed;
mod vehicle;

pub use config::InventoryConfig;
pub use error::{ConfigError, IntakeError, InventoryError, ValidationError};
#[cfg(feature = "emitter")]
pub use events::InventoryEvents;
pub use identity::{IdAllocator, VehicleId};
pub use intake::VehicleForm;
pub use inventory::{Inventory, InventoryStatistics};
pub use vehicle::{create_vehicle, KindAttributes, Vehicle, VehicleKind, VehicleSpec};

// Re-export the decimal type prices are expressed in
pub use rust_decimal::Decimal;
