//! Rate set model.
//!
//! A [`RateSet`] is one immutable snapshot of per-unit rates. New rates are
//! recorded as new snapshots; the newest snapshot of a kind is the current one.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkCategory;

/// Which audience a rate set is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    /// Rates shown to employees.
    Public,
    /// The actual rates used for payroll.
    Private,
}

impl RateKind {
    /// Returns the snake_case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            RateKind::Public => "public",
            RateKind::Private => "private",
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One versioned snapshot of per-unit rates for the fixed categories.
///
/// There is no rate for [`WorkCategory::Other`]; that rate lives on each
/// work record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{RateKind, RateSet, WorkCategory};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let rates = RateSet::zero(RateKind::Private, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
///     .with_rate(WorkCategory::Awak, Decimal::from(100))
///     .with_rate(WorkCategory::Jawak, Decimal::from(50));
///
/// assert_eq!(rates.rate(WorkCategory::Awak), Some(Decimal::from(100)));
/// assert_eq!(rates.rate(WorkCategory::Panni), Some(Decimal::ZERO));
/// assert_eq!(rates.rate(WorkCategory::Other), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSet {
    /// Public or private.
    pub kind: RateKind,
    /// When this snapshot was recorded.
    pub created_at: DateTime<Utc>,
    /// Rate per inbound bag.
    #[serde(alias = "awak_rate")]
    pub awak: Decimal,
    /// Rate per outbound bag.
    #[serde(alias = "jawak_rate")]
    pub jawak: Decimal,
    /// Rate per inbound dock bag.
    #[serde(alias = "dockawak_rate")]
    pub dock_awak: Decimal,
    /// Rate per outbound dock bag.
    #[serde(alias = "dockjawak_rate")]
    pub dock_jawak: Decimal,
    /// Rate per outbound bag with a warning label.
    #[serde(alias = "jawakwarning_rate")]
    pub jawak_warning: Decimal,
    /// Rate per outbound dock bag with a warning label.
    #[serde(alias = "dockjawakwarning_rate")]
    pub dock_jawak_warning: Decimal,
    /// Rate per box.
    #[serde(alias = "checkbox_rate")]
    pub checkbox: Decimal,
    /// Rate per plastic-wrapped load.
    #[serde(alias = "panni_rate")]
    pub panni: Decimal,
    /// Rate per five kilogram sack.
    #[serde(alias = "potti5_rate")]
    pub potti5: Decimal,
    /// Rate per ten kilogram sack.
    #[serde(alias = "potti10_rate")]
    pub potti10: Decimal,
    /// Rate per Solapur consignment.
    #[serde(alias = "solapur_rate")]
    pub solapur: Decimal,
}

impl RateSet {
    /// Creates a rate set with every rate at zero.
    pub fn zero(kind: RateKind, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            created_at,
            awak: Decimal::ZERO,
            jawak: Decimal::ZERO,
            dock_awak: Decimal::ZERO,
            dock_jawak: Decimal::ZERO,
            jawak_warning: Decimal::ZERO,
            dock_jawak_warning: Decimal::ZERO,
            checkbox: Decimal::ZERO,
            panni: Decimal::ZERO,
            potti5: Decimal::ZERO,
            potti10: Decimal::ZERO,
            solapur: Decimal::ZERO,
        }
    }

    /// Returns the rate for a fixed category, or `None` for `Other`.
    pub fn rate(&self, category: WorkCategory) -> Option<Decimal> {
        let rate = match category {
            WorkCategory::Awak => self.awak,
            WorkCategory::Jawak => self.jawak,
            WorkCategory::DockAwak => self.dock_awak,
            WorkCategory::DockJawak => self.dock_jawak,
            WorkCategory::JawakWarning => self.jawak_warning,
            WorkCategory::DockJawakWarning => self.dock_jawak_warning,
            WorkCategory::Checkbox => self.checkbox,
            WorkCategory::Panni => self.panni,
            WorkCategory::Potti5 => self.potti5,
            WorkCategory::Potti10 => self.potti10,
            WorkCategory::Solapur => self.solapur,
            WorkCategory::Other => return None,
        };
        Some(rate)
    }

    /// Returns the rate set with one fixed category's rate replaced.
    ///
    /// `Other` has no shared rate, so passing it leaves the set unchanged.
    pub fn with_rate(mut self, category: WorkCategory, rate: Decimal) -> Self {
        let slot = match category {
            WorkCategory::Awak => &mut self.awak,
            WorkCategory::Jawak => &mut self.jawak,
            WorkCategory::DockAwak => &mut self.dock_awak,
            WorkCategory::DockJawak => &mut self.dock_jawak,
            WorkCategory::JawakWarning => &mut self.jawak_warning,
            WorkCategory::DockJawakWarning => &mut self.dock_jawak_warning,
            WorkCategory::Checkbox => &mut self.checkbox,
            WorkCategory::Panni => &mut self.panni,
            WorkCategory::Potti5 => &mut self.potti5,
            WorkCategory::Potti10 => &mut self.potti10,
            WorkCategory::Solapur => &mut self.solapur,
            WorkCategory::Other => return self,
        };
        *slot = rate;
        self
    }

    /// Iterates over the fixed categories and their rates.
    pub fn rates(&self) -> impl Iterator<Item = (WorkCategory, Decimal)> + '_ {
        WorkCategory::FIXED
            .into_iter()
            .filter_map(|c| self.rate(c).map(|r| (c, r)))
    }
}
