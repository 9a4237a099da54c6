//! Salary and commission ledger entries.
//!
//! These are the already-computed amounts the back office stores per
//! employee and per day. Reports over them only sum and count.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One stored salary amount for an employee on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    /// The employee the salary was paid to.
    pub employee_id: u64,
    /// The employee's display name.
    pub employee_name: String,
    /// The day the salary was earned.
    pub salary_date: NaiveDate,
    /// The amount earned.
    pub salary_amount: Decimal,
}

/// One stored commission amount for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionEntry {
    /// The day the commission was generated for.
    pub commission_date: NaiveDate,
    /// The commission amount.
    pub commission_amount: Decimal,
}

/// How a salary ledger report is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Every employee's salary for a single day.
    Day,
    /// One employee's salaries across a date range.
    Range,
    /// One employee's salaries for a preset period (this week, all time).
    Employee,
}
