//! Request types for the payroll engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RateKind, WorkRecord};

/// Request body for the `/salary/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAmountRequest {
    /// Which current rate set to price with.
    pub rate_kind: RateKind,
    /// The day's work quantities.
    pub record: WorkRecord,
}

/// Request body for the `/salary/range` endpoint.
///
/// Records outside `[start_date, end_date]` are ignored. The rest need not
/// be sorted; the handler orders them by date before aggregating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRangeRequest {
    /// Which current rate set to price with.
    pub rate_kind: RateKind,
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Work records for one scope (an employee or the whole dock).
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_request_defaults_records() {
        let json = r#"{
            "rate_kind": "private",
            "start_date": "2025-03-01",
            "end_date": "2025-03-07"
        }"#;

        let request: SalaryRangeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rate_kind, RateKind::Private);
        assert!(request.records.is_empty());
    }

    #[test]
    fn test_daily_request_deserialization() {
        let json = r#"{
            "rate_kind": "public",
            "record": { "date": "2025-03-04", "awak": 3, "other": 1, "other_rate": 12 }
        }"#;

        let request: DailyAmountRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rate_kind, RateKind::Public);
        assert_eq!(request.record.quantities.awak, 3);
        assert!(request.record.other_rate.is_some());
    }
}
