//! Attendance summaries and daily salary sharing.
//!
//! Dock work is recorded for the whole crew, so a day's total is shared
//! equally between the employees marked present that day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, DailyAmount};

/// Attendance counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The day summarized.
    pub date: NaiveDate,
    /// Employees marked present, in id order.
    pub present_ids: Vec<u64>,
    /// Number of employees marked present.
    pub present: usize,
    /// Number of employees marked absent.
    pub absent: usize,
}

impl AttendanceSummary {
    /// Returns the number of employees with a record that day.
    pub fn total(&self) -> usize {
        self.present + self.absent
    }
}

/// A day's salary shared between the employees present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalaryShare {
    /// The day the salary was earned.
    pub date: NaiveDate,
    /// The crew's total salary for the day.
    pub total_salary: Decimal,
    /// Number of employees sharing it.
    pub present_count: usize,
    /// Each present employee's share.
    pub per_employee_salary: Decimal,
}

/// Summarizes attendance records for one day.
///
/// Records for other dates are ignored. If an employee has more than one
/// record for the day, the last one counts.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_attendance;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let records = vec![
///     AttendanceRecord { employee_id: 1, date: day, status: AttendanceStatus::Present },
///     AttendanceRecord { employee_id: 2, date: day, status: AttendanceStatus::Absent },
///     AttendanceRecord { employee_id: 3, date: day, status: AttendanceStatus::Present },
/// ];
///
/// let summary = summarize_attendance(&records, day);
/// assert_eq!(summary.present, 2);
/// assert_eq!(summary.absent, 1);
/// assert_eq!(summary.present_ids, vec![1, 3]);
/// ```
pub fn summarize_attendance(records: &[AttendanceRecord], date: NaiveDate) -> AttendanceSummary {
    let mut by_employee: BTreeMap<u64, AttendanceStatus> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date == date) {
        if by_employee.insert(record.employee_id, record.status).is_some() {
            warn!(
                employee_id = record.employee_id,
                date = %date,
                "Duplicate attendance record; keeping the last one"
            );
        }
    }

    let present_ids: Vec<u64> = by_employee
        .iter()
        .filter(|(_, status)| **status == AttendanceStatus::Present)
        .map(|(id, _)| *id)
        .collect();
    let present = present_ids.len();
    let absent = by_employee.len() - present;

    AttendanceSummary {
        date,
        present_ids,
        present,
        absent,
    }
}

/// Shares a day's total salary equally between the employees present.
///
/// # Returns
///
/// The per-employee share at full precision, or `NoEmployeesPresent` if
/// `present_count` is zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::share_daily_salary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let share = share_daily_salary(day, Decimal::from(1200), 4).unwrap();
/// assert_eq!(share.per_employee_salary, Decimal::from(300));
///
/// assert!(share_daily_salary(day, Decimal::from(1200), 0).is_err());
/// ```
pub fn share_daily_salary(
    date: NaiveDate,
    total_salary: Decimal,
    present_count: usize,
) -> EngineResult<DailySalaryShare> {
    if present_count == 0 {
        return Err(EngineError::NoEmployeesPresent { date });
    }

    let per_employee_salary = total_salary
        .checked_div(Decimal::from(present_count))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("could not share {} between {}", total_salary, present_count),
        })?;

    Ok(DailySalaryShare {
        date,
        total_salary,
        present_count,
        per_employee_salary,
    })
}

/// Shares a priced day between the employees present on that day.
pub fn share_daily_amount(
    daily: &DailyAmount,
    attendance: &[AttendanceRecord],
) -> EngineResult<DailySalaryShare> {
    let summary = summarize_attendance(attendance, daily.date);
    share_daily_salary(daily.date, daily.day_total, summary.present)
}
