use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InventoryError;
use crate::money::format_currency;
use crate::vehicle::Vehicle;

/// Aggregates over the vehicles currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStatistics {
    pub count: usize,
    pub total: Decimal,
    /// `total / count`, or zero for an empty inventory.
    pub average: Decimal,
}

impl InventoryStatistics {
    /// Fold prices into count, total and average. A total past
    /// `Decimal::MAX` is reported as `InventoryError::Overflow`.
    pub fn from_vehicles<'a, I>(vehicles: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = &'a Vehicle>,
    {
        let (count, total) = vehicles.into_iter().try_fold(
            (0usize, Decimal::ZERO),
            |(count, total), vehicle| {
                total
                    .checked_add(vehicle.price())
                    .map(|total| (count + 1, total))
                    .ok_or(InventoryError::Overflow { field: "total" })
            },
        )?;

        let average = if count > 0 {
            total
                .checked_div(Decimal::from(count))
                .ok_or(InventoryError::Overflow { field: "average" })?
        } else {
            Decimal::ZERO
        };

        Ok(InventoryStatistics {
            count,
            total,
            average,
        })
    }

    pub fn total_display(&self, currency_symbol: &str) -> String {
        format_currency(self.total, currency_symbol)
    }

    pub fn average_display(&self, currency_symbol: &str) -> String {
        format_currency(self.average, currency_symbol)
    }
}

impl Default for InventoryStatistics {
    fn default() -> Self {
        InventoryStatistics {
            count: 0,
            total: Decimal::ZERO,
            average: Decimal::ZERO,
        }
    }
}
