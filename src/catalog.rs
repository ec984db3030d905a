//! Fixed choices a form offers when entering a vehicle.

use chrono::Datelike;

use crate::config::InventoryConfig;
use crate::vehicle::VehicleKind;

pub const VEHICLE_KINDS: [&str; 2] = VehicleKind::LABELS;

pub const MAKES: [&str; 12] = [
    "Honda",
    "Toyota",
    "Ford",
    "Chevrolet",
    "Hyundai",
    "Kia",
    "Nissan",
    "Volkswagen",
    "Mazda",
    "Dodge",
    "BMW",
    "Mercedes-Benz",
];

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Model years newest first: `current`, `current - 1`, ... `current - span`.
pub fn year_options(current: i32, span: u32) -> Vec<i32> {
    let span = i32::try_from(span).unwrap_or(i32::MAX);
    (current.saturating_sub(span)..=current).rev().collect()
}

pub fn configured_year_options(config: &InventoryConfig) -> Vec<i32> {
    year_options(current_year(), config.year_span)
}
