mod kind;
mod spec;

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::identity::VehicleId;
use crate::money::{format_currency, DEFAULT_CURRENCY_SYMBOL};

pub use kind::{KindAttributes, VehicleKind};
pub use spec::{create_vehicle, VehicleSpec};

/// A validated vehicle. Only `VehicleSpec::build` creates one, and it is
/// never mutated afterwards; editing builds a new vehicle with a new id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    id: VehicleId,
    make: String,
    model: String,
    year: i32,
    price: Decimal,
    is_new: bool,
    #[serde(flatten)]
    kind: VehicleKind,
}

impl Vehicle {
    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn has_sidecar(&self) -> Option<bool> {
        self.kind.has_sidecar()
    }

    /// `[id] year make model - kind - New|Used - $price`, plus any
    /// kind-specific suffix.
    pub fn describe(&self) -> String {
        self.describe_with(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn describe_with(&self, currency_symbol: &str) -> String {
        let mut text = format!(
            "[{}] {} {} {} - {} - {} - {}",
            self.id,
            self.year,
            self.make,
            self.model,
            self.kind.label(),
            if self.is_new { "New" } else { "Used" },
            format_currency(self.price, currency_symbol),
        );
        if let Some(suffix) = self.kind.describe_suffix() {
            text.push_str(" - ");
            text.push_str(suffix);
        }
        text
    }

    /// The inputs this vehicle was built from, ready to be edited and rebuilt.
    pub fn to_spec(&self) -> VehicleSpec {
        VehicleSpec {
            kind: self.kind,
            make: Some(self.make.clone()),
            model: self.model.clone(),
            year: self.year,
            price: self.price,
            is_new: self.is_new,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
