//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod date_range;
mod ledger;
mod rate_set;
mod work_record;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calculation_result::{
    AuditWarning, CategoryAmounts, DailyAmount, PaymentSplit, RangeAggregate, SalaryRangeReport,
};
pub use date_range::DateRange;
pub use ledger::{CommissionEntry, ReportMode, SalaryEntry};
pub use rate_set::{RateKind, RateSet};
pub use work_record::{WorkCategory, WorkQuantities, WorkRecord};
