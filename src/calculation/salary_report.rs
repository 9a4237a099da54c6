//! Salary ledger report.
//!
//! Summarizes stored salary entries the way the back office views them:
//! by day across all employees, or per employee across a range.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ReportMode, SalaryEntry};

/// One ledger row with its running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReportRow {
    /// The stored entry.
    #[serde(flatten)]
    pub entry: SalaryEntry,
    /// Sum of this and every earlier row's amount.
    pub running_total: Decimal,
}

/// Totals and statistics over a set of salary entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// How the entries were selected.
    pub mode: ReportMode,
    /// The entries in input order with running balances.
    pub rows: Vec<SalaryReportRow>,
    /// Sum of all amounts.
    pub total_salary: Decimal,
    /// Number of entries.
    pub records: usize,
    /// Day mode only: entries with a positive amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_count: Option<usize>,
    /// Range and employee modes: distinct salary dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_days: Option<usize>,
    /// Range and employee modes: total divided by distinct days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_per_day: Option<Decimal>,
}

/// Builds a ledger report over salary entries.
///
/// Running totals follow input order, so pass entries sorted by date for
/// range and employee views. In day mode an employee counts as present when
/// their amount is positive. In the other modes the average is taken over
/// distinct salary dates, and is zero when there are no entries.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_salary_report;
/// use payroll_engine::models::{ReportMode, SalaryEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let entries = vec![
///     SalaryEntry { employee_id: 1, employee_name: "Ravi".into(), salary_date: day, salary_amount: Decimal::from(450) },
///     SalaryEntry { employee_id: 2, employee_name: "Sunil".into(), salary_date: day, salary_amount: Decimal::ZERO },
/// ];
///
/// let report = build_salary_report(&entries, ReportMode::Day).unwrap();
/// assert_eq!(report.total_salary, Decimal::from(450));
/// assert_eq!(report.present_count, Some(1));
/// ```
pub fn build_salary_report(entries: &[SalaryEntry], mode: ReportMode) -> EngineResult<SalaryReport> {
    let rows = entries
        .iter()
        .try_fold(Vec::with_capacity(entries.len()), |mut rows, entry| {
            let previous = rows
                .last()
                .map(|r: &SalaryReportRow| r.running_total)
                .unwrap_or(Decimal::ZERO);
            let running_total = previous.checked_add(entry.salary_amount).ok_or_else(|| {
                EngineError::CalculationError {
                    message: format!("salary total overflowed at {}", entry.salary_date),
                }
            })?;
            rows.push(SalaryReportRow {
                entry: entry.clone(),
                running_total,
            });
            Ok::<_, EngineError>(rows)
        })?;

    let total_salary = rows.last().map_or(Decimal::ZERO, |r| r.running_total);
    let records = rows.len();

    let (present_count, unique_days, average_per_day) = match mode {
        ReportMode::Day => {
            let present = entries
                .iter()
                .filter(|e| e.salary_amount > Decimal::ZERO)
                .count();
            (Some(present), None, None)
        }
        ReportMode::Range | ReportMode::Employee => {
            let days: BTreeSet<_> = entries.iter().map(|e| e.salary_date).collect();
            let average = if days.is_empty() {
                Decimal::ZERO
            } else {
                total_salary / Decimal::from(days.len())
            };
            (None, Some(days.len()), Some(average))
        }
    };

    Ok(SalaryReport {
        mode,
        rows,
        total_salary,
        records,
        present_count,
        unique_days,
        average_per_day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(employee_id: u64, date: &str, amount: &str) -> SalaryEntry {
        SalaryEntry {
            employee_id,
            employee_name: format!("Employee {}", employee_id),
            salary_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            salary_amount: dec(amount),
        }
    }

    #[test]
    fn test_running_totals_accumulate_in_order() {
        let entries = vec![
            entry(7, "2025-03-01", "310.50"),
            entry(7, "2025-03-02", "0"),
            entry(7, "2025-03-03", "289.50"),
        ];

        let report = build_salary_report(&entries, ReportMode::Range).unwrap();

        let running: Vec<Decimal> = report.rows.iter().map(|r| r.running_total).collect();
        assert_eq!(running, vec![dec("310.50"), dec("310.50"), dec("600.00")]);
        assert_eq!(report.total_salary, dec("600"));
        assert_eq!(report.records, 3);
    }

    #[test]
    fn test_range_average_over_distinct_days() {
        let entries = vec![
            entry(7, "2025-03-01", "100"),
            entry(7, "2025-03-01", "50"),
            entry(7, "2025-03-02", "150"),
        ];

        let report = build_salary_report(&entries, ReportMode::Employee).unwrap();

        assert_eq!(report.unique_days, Some(2));
        assert_eq!(report.average_per_day, Some(dec("150")));
        assert_eq!(report.present_count, None);
    }

    #[test]
    fn test_day_mode_counts_positive_amounts() {
        let entries = vec![
            entry(1, "2025-03-04", "420"),
            entry(2, "2025-03-04", "0"),
            entry(3, "2025-03-04", "420"),
        ];

        let report = build_salary_report(&entries, ReportMode::Day).unwrap();

        assert_eq!(report.present_count, Some(2));
        assert_eq!(report.unique_days, None);
        assert_eq!(report.average_per_day, None);
    }

    #[test]
    fn test_empty_report() {
        let report = build_salary_report(&[], ReportMode::Range).unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.total_salary, Decimal::ZERO);
        assert_eq!(report.unique_days, Some(0));
        assert_eq!(report.average_per_day, Some(Decimal::ZERO));
    }
}
