//! Demo vehicles a fresh inventory can start with.

use rust_decimal::Decimal;

use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::vehicle::{Vehicle, VehicleSpec};

pub fn demo_specs() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec::car()
            .make("Hyundai")
            .model("Tucson")
            .year(2020)
            .price(Decimal::from(17500))
            .is_new(true),
        VehicleSpec::car()
            .make("Dodge")
            .model("Caliber")
            .year(2012)
            .price(Decimal::from(11499))
            .is_new(true),
        VehicleSpec::car()
            .make("Volkswagen")
            .model("Beetle")
            .year(1979)
            .price(Decimal::from(5999))
            .is_new(false),
        VehicleSpec::motorcycle(false)
            .make("Honda")
            .model("CB500F")
            .year(2022)
            .price(Decimal::from(8500))
            .is_new(true),
    ]
}

/// Add the demo vehicles, in order, using the inventory's own allocator.
pub fn seed_demo(inventory: &Inventory) -> Result<Vec<Vehicle>, InventoryError> {
    demo_specs()
        .into_iter()
        .map(|spec| inventory.create(spec))
        .collect()
}
