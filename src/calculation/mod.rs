//! Calculation logic for the payroll engine.
//!
//! This module contains the rate lookup, the daily amount calculator, the
//! range aggregator, and the payment split calculator, which together turn
//! work records and rates into payable amounts. It also contains the
//! attendance, salary ledger, and commission summaries built on top of them.
//!
//! Every function here is pure and synchronous.

mod attendance;
mod commission;
mod daily_amount;
mod payment_split;
mod range_aggregate;
mod rate_lookup;
mod salary_report;

pub use attendance::{
    AttendanceSummary, DailySalaryShare, share_daily_amount, share_daily_salary,
    summarize_attendance,
};
pub use commission::{CommissionSummary, summarize_commissions};
pub use daily_amount::compute_daily_amount;
pub use payment_split::{TDS_RATE, split_payment, split_range};
pub use range_aggregate::aggregate_range;
pub use rate_lookup::{RateSource, RateTable, resolve_rate};
pub use salary_report::{SalaryReport, SalaryReportRow, build_salary_report};
