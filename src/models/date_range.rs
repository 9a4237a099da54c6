//! Inclusive date range model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive `[start_date, end_date]` range of calendar dates.
///
/// Construct through [`DateRange::new`], which rejects reversed ranges.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // start date
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())); // end date
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap())); // after
/// assert_eq!(range.num_days(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDateRange")]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the range (inclusive).
    pub end_date: NaiveDate,
}

/// Wire form of a [`DateRange`], validated on conversion.
#[derive(Deserialize)]
struct UncheckedDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<UncheckedDateRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: UncheckedDateRange) -> EngineResult<Self> {
        DateRange::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Creates a range, returning `InvalidDateRange` if `start > end`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates a range covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Checks if a date falls within the range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the range.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = DateRange::new(make_date("2025-03-10"), make_date("2025-03-01"));
        match result {
            Err(EngineError::InvalidDateRange { start, end }) => {
                assert_eq!(start, make_date("2025-03-10"));
                assert_eq!(end, make_date("2025-03-01"));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single_day(make_date("2025-03-04"));
        assert_eq!(range.num_days(), 1);
        assert!(range.contains_date(make_date("2025-03-04")));
        assert!(!range.contains_date(make_date("2025-03-03")));
    }

    #[test]
    fn test_range_across_month_boundary() {
        let range = DateRange::new(make_date("2025-02-27"), make_date("2025-03-02")).unwrap();
        assert_eq!(range.num_days(), 4);
        assert!(range.contains_date(make_date("2025-02-28")));
        assert!(range.contains_date(make_date("2025-03-01")));
    }

    #[test]
    fn test_deserialize_validates_order() {
        let range: DateRange =
            serde_json::from_str(r#"{"start_date":"2025-03-01","end_date":"2025-03-07"}"#).unwrap();
        assert_eq!(range.num_days(), 7);

        let reversed = serde_json::from_str::<DateRange>(
            r#"{"start_date":"2025-03-07","end_date":"2025-03-01"}"#,
        );
        let message = reversed.unwrap_err().to_string();
        assert!(message.contains("Invalid date range"), "{}", message);
    }
}
