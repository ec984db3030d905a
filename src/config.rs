use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::money::DEFAULT_CURRENCY_SYMBOL;

/// Settings a host application hands to the inventory.
///
/// Every key is optional in JSON; missing keys fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Load the demo vehicles when the inventory is created.
    pub seed_demo_data: bool,
    pub currency_symbol: String,
    /// How many years back the year selection reaches.
    pub year_span: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            seed_demo_data: false,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            year_span: 50,
        }
    }
}

impl InventoryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
