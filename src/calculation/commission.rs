//! Commission summary over a date range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CommissionEntry, DateRange};

/// Commission entries within a range and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSummary {
    /// The inclusive range summarized.
    pub period: DateRange,
    /// Entries inside the range, sorted by date.
    pub entries: Vec<CommissionEntry>,
    /// Sum of the entries' amounts.
    pub total_commission: Decimal,
}

/// Totals the commission entries falling inside a date range.
///
/// Entries outside the range are dropped; the rest are sorted by date, with
/// entries sharing a date kept in input order.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_commissions;
/// use payroll_engine::models::{CommissionEntry, DateRange};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let entries = vec![
///     CommissionEntry { commission_date: date(2), commission_amount: Decimal::from(80) },
///     CommissionEntry { commission_date: date(9), commission_amount: Decimal::from(40) },
/// ];
///
/// let range = DateRange::new(date(1), date(7)).unwrap();
/// let summary = summarize_commissions(&entries, range).unwrap();
/// assert_eq!(summary.entries.len(), 1);
/// assert_eq!(summary.total_commission, Decimal::from(80));
/// ```
pub fn summarize_commissions(
    entries: &[CommissionEntry],
    period: DateRange,
) -> EngineResult<CommissionSummary> {
    let mut in_range: Vec<CommissionEntry> = entries
        .iter()
        .filter(|e| period.contains_date(e.commission_date))
        .cloned()
        .collect();
    in_range.sort_by_key(|e| e.commission_date);

    let total_commission = in_range
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.commission_amount))
        .ok_or_else(|| EngineError::CalculationError {
            message: "commission total overflowed".to_string(),
        })?;

    Ok(CommissionSummary {
        period,
        entries: in_range,
        total_commission,
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

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn commission(date: &str, amount: &str) -> CommissionEntry {
        CommissionEntry {
            commission_date: make_date(date),
            commission_amount: dec(amount),
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let entries = vec![
            commission("2025-02-28", "10"),
            commission("2025-03-01", "20.50"),
            commission("2025-03-07", "30.25"),
            commission("2025-03-08", "40"),
        ];
        let period = DateRange::new(make_date("2025-03-01"), make_date("2025-03-07")).unwrap();

        let summary = summarize_commissions(&entries, period).unwrap();

        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.total_commission, dec("50.75"));
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let entries = vec![
            commission("2025-03-05", "1"),
            commission("2025-03-02", "2"),
            commission("2025-03-03", "3"),
        ];
        let period = DateRange::new(make_date("2025-03-01"), make_date("2025-03-31")).unwrap();

        let summary = summarize_commissions(&entries, period).unwrap();

        let dates: Vec<NaiveDate> = summary.entries.iter().map(|e| e.commission_date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-03-02"),
                make_date("2025-03-03"),
                make_date("2025-03-05")
            ]
        );
    }

    #[test]
    fn test_no_entries_in_range() {
        let period = DateRange::single_day(make_date("2025-03-04"));
        let summary = summarize_commissions(&[commission("2025-03-05", "9")], period).unwrap();
        assert!(summary.entries.is_empty());
        assert_eq!(summary.total_commission, Decimal::ZERO);
    }
}
