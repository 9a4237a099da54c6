//! Work record model and the work-unit categories it counts.
//!
//! A [`WorkRecord`] holds one day of raw piece-rate quantities, either for a
//! single employee or for the whole dock.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A piece-rate work-unit category.
///
/// The first eleven variants are paid from the shared rate table. `Other` is
/// an open-ended category whose rate travels on each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    /// Inbound bags.
    Awak,
    /// Outbound bags.
    Jawak,
    /// Inbound bags handled at the dock.
    DockAwak,
    /// Outbound bags handled at the dock.
    DockJawak,
    /// Outbound bags carrying a warning label.
    JawakWarning,
    /// Outbound dock bags carrying a warning label.
    DockJawakWarning,
    /// Boxes.
    Checkbox,
    /// Plastic-wrapped loads.
    Panni,
    /// Five kilogram sacks.
    Potti5,
    /// Ten kilogram sacks.
    Potti10,
    /// Solapur consignments.
    Solapur,
    /// Anything else, paid at the record's own rate.
    Other,
}

impl WorkCategory {
    /// The categories priced by the shared rate table, in display order.
    pub const FIXED: [WorkCategory; 11] = [
        WorkCategory::Awak,
        WorkCategory::Jawak,
        WorkCategory::DockAwak,
        WorkCategory::DockJawak,
        WorkCategory::JawakWarning,
        WorkCategory::DockJawakWarning,
        WorkCategory::Checkbox,
        WorkCategory::Panni,
        WorkCategory::Potti5,
        WorkCategory::Potti10,
        WorkCategory::Solapur,
    ];

    /// Every category, fixed ones first and `Other` last.
    pub const ALL: [WorkCategory; 12] = [
        WorkCategory::Awak,
        WorkCategory::Jawak,
        WorkCategory::DockAwak,
        WorkCategory::DockJawak,
        WorkCategory::JawakWarning,
        WorkCategory::DockJawakWarning,
        WorkCategory::Checkbox,
        WorkCategory::Panni,
        WorkCategory::Potti5,
        WorkCategory::Potti10,
        WorkCategory::Solapur,
        WorkCategory::Other,
    ];

    /// Returns the snake_case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkCategory::Awak => "awak",
            WorkCategory::Jawak => "jawak",
            WorkCategory::DockAwak => "dock_awak",
            WorkCategory::DockJawak => "dock_jawak",
            WorkCategory::JawakWarning => "jawak_warning",
            WorkCategory::DockJawakWarning => "dock_jawak_warning",
            WorkCategory::Checkbox => "checkbox",
            WorkCategory::Panni => "panni",
            WorkCategory::Potti5 => "potti5",
            WorkCategory::Potti10 => "potti10",
            WorkCategory::Solapur => "solapur",
            WorkCategory::Other => "other",
        }
    }

    /// Returns true if the category is priced by the shared rate table.
    pub fn is_fixed(self) -> bool {
        self != WorkCategory::Other
    }
}

impl fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantities counted per category.
///
/// Used both for a single day's counts and for totals across a range.
/// Missing fields deserialize as zero. The aliases accept the compact key
/// names used by the mobile client (`dockawak`, `jawakwarning`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkQuantities {
    /// Inbound bags.
    pub awak: i64,
    /// Outbound bags.
    pub jawak: i64,
    /// Inbound dock bags.
    #[serde(alias = "dockawak")]
    pub dock_awak: i64,
    /// Outbound dock bags.
    #[serde(alias = "dockjawak")]
    pub dock_jawak: i64,
    /// Outbound bags with a warning label.
    #[serde(alias = "jawakwarning")]
    pub jawak_warning: i64,
    /// Outbound dock bags with a warning label.
    #[serde(alias = "dockjawakwarning")]
    pub dock_jawak_warning: i64,
    /// Boxes.
    pub checkbox: i64,
    /// Plastic-wrapped loads.
    pub panni: i64,
    /// Five kilogram sacks.
    pub potti5: i64,
    /// Ten kilogram sacks.
    pub potti10: i64,
    /// Solapur consignments.
    pub solapur: i64,
    /// Free-form category.
    pub other: i64,
}

impl WorkQuantities {
    /// Returns the quantity recorded for a category.
    pub fn get(&self, category: WorkCategory) -> i64 {
        match category {
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
            WorkCategory::Other => self.other,
        }
    }

    /// Returns a copy with one category's quantity replaced.
    pub fn with(mut self, category: WorkCategory, quantity: i64) -> Self {
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
            WorkCategory::Other => &mut self.other,
        };
        *slot = quantity;
        self
    }

    /// Iterates over every category and its quantity.
    pub fn iter(&self) -> impl Iterator<Item = (WorkCategory, i64)> + '_ {
        WorkCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Adds two sets of quantities field by field.
    ///
    /// Returns `None` if any field overflows.
    pub fn checked_add(&self, other: &WorkQuantities) -> Option<WorkQuantities> {
        WorkCategory::ALL
            .into_iter()
            .try_fold(WorkQuantities::default(), |acc, c| {
                Some(acc.with(c, self.get(c).checked_add(other.get(c))?))
            })
    }
}

/// One day of raw work quantities.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{WorkCategory, WorkRecord};
/// use chrono::NaiveDate;
///
/// let record = WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
///     .with_quantity(WorkCategory::Awak, 3)
///     .with_quantity(WorkCategory::Jawak, 2);
///
/// assert_eq!(record.quantities.awak, 3);
/// assert_eq!(record.quantities.panni, 0);
/// assert!(record.other_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The calendar date the work was done.
    #[serde(alias = "work_date")]
    pub date: NaiveDate,
    /// Quantities per category.
    #[serde(flatten)]
    pub quantities: WorkQuantities,
    /// Rate for the `other` category, local to this record.
    #[serde(default)]
    pub other_rate: Option<Decimal>,
}

impl WorkRecord {
    /// Creates a record with every quantity at zero and no `other` rate.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            quantities: WorkQuantities::default(),
            other_rate: None,
        }
    }

    /// Returns the record with one category's quantity set.
    pub fn with_quantity(mut self, category: WorkCategory, quantity: i64) -> Self {
        self.quantities = self.quantities.with(category, quantity);
        self
    }

    /// Returns the record with its `other` rate set.
    pub fn with_other_rate(mut self, rate: Decimal) -> Self {
        self.other_rate = Some(rate);
        self
    }
}
