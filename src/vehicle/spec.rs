use rust_decimal::Decimal;

use super::{Vehicle, VehicleKind};
use crate::catalog::current_year;
use crate::error::ValidationError;
use crate::identity::IdAllocator;

/// Unvalidated input for a vehicle. Nothing here is checked until `build`.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    pub kind: VehicleKind,
    pub make: Option<String>,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub is_new: bool,
}

impl VehicleSpec {
    pub fn new(kind: VehicleKind) -> Self {
        VehicleSpec {
            kind,
            make: None,
            model: String::new(),
            year: current_year(),
            price: Decimal::ZERO,
            is_new: false,
        }
    }

    pub fn car() -> Self {
        Self::new(VehicleKind::Car)
    }

    pub fn motorcycle(has_sidecar: bool) -> Self {
        Self::new(VehicleKind::Motorcycle { has_sidecar })
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn is_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// Check every field rule. Model is checked before price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::BlankField { field: "model" });
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "price",
                value: self.price,
            });
        }
        Ok(())
    }

    /// Validate, then take an id. A rejected spec leaves the allocator untouched.
    pub fn build(self, ids: &IdAllocator) -> Result<Vehicle, ValidationError> {
        if let Err(err) = self.validate() {
            tracing::debug!(field = err.field(), kind = self.kind.label(), "rejected vehicle: {}", err);
            return Err(err);
        }

        Ok(Vehicle {
            id: ids.next(),
            make: self.make.unwrap_or_default(),
            model: self.model,
            year: self.year,
            price: self.price,
            is_new: self.is_new,
            kind: self.kind,
        })
    }
}

/// Build a vehicle of any kind from its raw fields.
pub fn create_vehicle(
    ids: &IdAllocator,
    kind: VehicleKind,
    make: Option<&str>,
    model: &str,
    year: i32,
    price: Decimal,
    is_new: bool,
) -> Result<Vehicle, ValidationError> {
    VehicleSpec {
        kind,
        make: make.map(str::to_string),
        model: model.to_string(),
        year,
        price,
        is_new,
    }
    .build(ids)
}
