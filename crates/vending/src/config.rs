//! Machine configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "products": [ { "name": "Funnions", "amount": 2, "price": "7.00" } ],
//!   "faults": { "stuck_below": 10, "wrong_product_below": 14 }
//! }
//! ```
//!
//! `faults` may be omitted and falls back to the default odds.

use serde::{Deserialize, Serialize};

use vendsim_core::{DomainError, DomainResult};

use crate::catalog::{CatalogEntry, demo_entries};
use crate::fault::FaultOdds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub products: Vec<CatalogEntry>,
    #[serde(default)]
    pub faults: FaultConfig,
}

/// Raw fault thresholds; checked by [`MachineConfig::validate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultConfig {
    pub stuck_below: u8,
    pub wrong_product_below: u8,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            stuck_below: FaultOdds::DEFAULT_STUCK_BELOW,
            wrong_product_below: FaultOdds::DEFAULT_WRONG_PRODUCT_BELOW,
        }
    }
}

impl MachineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed machine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.products.is_empty() {
            return Err(DomainError::validation("catalog must contain at least one product"));
        }
        if let Some(i) = self.products.iter().position(|p| p.name.trim().is_empty()) {
            return Err(DomainError::validation(format!("product #{i} has an empty name")));
        }
        self.odds().map(|_| ())
    }

    pub fn odds(&self) -> DomainResult<FaultOdds> {
        FaultOdds::new(self.faults.stuck_below, self.faults.wrong_product_below)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            products: demo_entries(),
            faults: FaultConfig::default(),
        }
    }
}
