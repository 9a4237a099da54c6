//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::RateTable;
use crate::format::format_currency;

/// Metadata about the payroll installation, from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Display name of the payroll installation.
    pub name: String,
    /// Symbol prefixed to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl EngineMetadata {
    /// Formats an amount for display with this installation's currency symbol.
    pub fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.currency_symbol)
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Installation metadata.
    metadata: EngineMetadata,
    /// Rate history across both kinds.
    rates: RateTable,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, rates: RateTable) -> Self {
        Self { metadata, rates }
    }

    /// Returns the installation metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the rate history.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
