//! Form intake: turns the raw values a UI collects into a `VehicleSpec`.
//!
//! The vehicle model itself never parses text. This is the one place where
//! price strings and selection lists are interpreted before handing typed
//! values to `VehicleSpec::build`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::catalog::{current_year, MAKES, VEHICLE_KINDS};
use crate::error::IntakeError;
use crate::inventory::Inventory;
use crate::vehicle::{KindAttributes, Vehicle, VehicleKind, VehicleSpec};

/// Raw field values as a form holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleForm {
    pub kind: Option<String>,
    pub make: Option<String>,
    pub model: String,
    pub year: Option<i32>,
    pub price: String,
    pub is_new: bool,
    pub has_sidecar: bool,
}

impl Default for VehicleForm {
    fn default() -> Self {
        VehicleForm {
            kind: Some(VEHICLE_KINDS[0].to_string()),
            make: Some(MAKES[0].to_string()),
            model: String::new(),
            year: Some(current_year()),
            price: String::new(),
            is_new: false,
            has_sidecar: false,
        }
    }
}

impl VehicleForm {
    /// Load an existing vehicle for editing. Submitting the form builds a
    /// new vehicle; the loaded one is left as it was.
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        VehicleForm {
            kind: Some(vehicle.kind_label().to_string()),
            make: Some(vehicle.make().to_string()),
            model: vehicle.model().to_string(),
            year: Some(vehicle.year()),
            price: vehicle.price().to_string(),
            is_new: vehicle.is_new(),
            has_sidecar: vehicle.has_sidecar().unwrap_or(false),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse and check selections: price first, then kind, make and year.
    pub fn to_spec(&self) -> Result<VehicleSpec, IntakeError> {
        let price = parse_price(&self.price)?;

        let label = match self.kind.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => return Err(IntakeError::MissingSelection { field: "kind" }),
        };
        let attributes = KindAttributes {
            has_sidecar: self.has_sidecar,
        };
        let kind = VehicleKind::from_label(label, attributes)
            .ok_or_else(|| IntakeError::UnknownKind(label.to_string()))?;

        let make = self
            .make
            .as_deref()
            .ok_or(IntakeError::MissingSelection { field: "make" })?;
        let year = self
            .year
            .ok_or(IntakeError::MissingSelection { field: "year" })?;

        Ok(VehicleSpec::new(kind)
            .make(make)
            .model(self.model.trim())
            .year(year)
            .price(price)
            .is_new(self.is_new))
    }

    /// Build the vehicle and add it to `inventory`.
    pub fn submit(&self, inventory: &Inventory) -> Result<Vehicle, IntakeError> {
        let spec = self.to_spec()?;
        let vehicle = inventory.create(spec)?;
        tracing::debug!(id = vehicle.id().value(), kind = vehicle.kind_label(), "form submitted");
        Ok(vehicle)
    }
}

/// Decimal price text; surrounding whitespace and `,` group separators are ignored.
fn parse_price(input: &str) -> Result<Decimal, IntakeError> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| IntakeError::InvalidNumber {
        field: "price",
        input: input.to_string(),
    })
}
