//! Payment split calculation functionality.
//!
//! Awak and jawak pay is routed online after withholding TDS. Everything
//! else in the grand total is paid in cash.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{PaymentSplit, RangeAggregate};

/// Flat TDS withheld from the online amount (1%).
///
/// A fixed business rule, not configurable.
pub const TDS_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Splits a range's pay into online, TDS and cash components.
///
/// * `online_before_tds = awak_amount + jawak_amount`
/// * `tds = online_before_tds × 1%`
/// * `online = online_before_tds − tds`
/// * `cash = grand_total − online − tds`
///
/// `cash` is a residual. If upstream data is inconsistent it comes out
/// negative; the value is returned as-is and logged, never clamped.
/// Arithmetic overflow is reported as `CalculationError`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_payment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_payment(Decimal::from(300), Decimal::from(100), Decimal::from(500)).unwrap();
///
/// assert_eq!(split.online_before_tds, Decimal::from(400));
/// assert_eq!(split.tds, Decimal::from_str("4.00").unwrap());
/// assert_eq!(split.online, Decimal::from_str("396.00").unwrap());
/// assert_eq!(split.cash, Decimal::from(100));
/// ```
pub fn split_payment(
    awak_amount: Decimal,
    jawak_amount: Decimal,
    grand_total: Decimal,
) -> EngineResult<PaymentSplit> {
    let online_before_tds = awak_amount
        .checked_add(jawak_amount)
        .ok_or_else(|| overflow("online amount"))?;
    let tds = online_before_tds
        .checked_mul(TDS_RATE)
        .ok_or_else(|| overflow("TDS"))?;
    let online = online_before_tds
        .checked_sub(tds)
        .ok_or_else(|| overflow("online after TDS"))?;
    let cash = grand_total
        .checked_sub(online)
        .and_then(|rest| rest.checked_sub(tds))
        .ok_or_else(|| overflow("cash residual"))?;

    let split = PaymentSplit {
        awak_amount,
        jawak_amount,
        online_before_tds,
        tds,
        online,
        cash,
    };

    if !split.is_consistent() {
        warn!(
            grand_total = %grand_total,
            online_before_tds = %online_before_tds,
            cash = %cash,
            "Cash residual is negative; upstream totals are inconsistent"
        );
    }

    Ok(split)
}

/// Splits the pay of an aggregated range.
///
/// Uses the aggregate's awak and jawak amount totals and its grand total.
pub fn split_range(aggregate: &RangeAggregate) -> EngineResult<PaymentSplit> {
    split_payment(
        aggregate.amount_totals.awak,
        aggregate.amount_totals.jawak,
        aggregate.grand_total,
    )
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} overflowed while splitting payment", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::aggregate_range;
    use crate::models::{RateKind, RateSet, WorkCategory, WorkRecord};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tds_rate_is_one_percent() {
        assert_eq!(TDS_RATE, dec("0.01"));
    }

    /// PS-001: 400 online before TDS with 500 grand total
    #[test]
    fn test_split_example() {
        let split = split_payment(dec("300"), dec("100"), dec("500")).unwrap();

        assert_eq!(split.online_before_tds, dec("400"));
        assert_eq!(split.tds, dec("4.00"));
        assert_eq!(split.online, dec("396.00"));
        assert_eq!(split.cash, dec("100"));
        assert!(split.verify().is_ok());
    }

    /// PS-002: nothing online means everything is cash
    #[test]
    fn test_no_awak_or_jawak_is_all_cash() {
        let split = split_payment(Decimal::ZERO, Decimal::ZERO, dec("812.75")).unwrap();

        assert_eq!(split.tds, Decimal::ZERO);
        assert_eq!(split.online, Decimal::ZERO);
        assert_eq!(split.cash, dec("812.75"));
    }

    /// PS-003: components add back up to the grand total
    #[test]
    fn test_components_sum_to_grand_total() {
        let split = split_payment(dec("1234.56"), dec("789.01"), dec("3000")).unwrap();
        assert_eq!(split.online + split.tds + split.cash, dec("3000"));
        assert_eq!(split.tds, dec("20.2357"));
    }

    /// PS-004: negative cash is surfaced, not clamped
    #[test]
    fn test_negative_cash_is_not_clamped() {
        let split = split_payment(dec("300"), dec("100"), dec("350")).unwrap();

        assert_eq!(split.cash, dec("-50"));
        assert!(!split.is_consistent());
        assert!(split.verify().is_err());
    }

    #[test]
    fn test_split_range_uses_aggregate_totals() {
        let rates = RateSet::zero(
            RateKind::Private,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .with_rate(WorkCategory::Awak, dec("100"))
        .with_rate(WorkCategory::Jawak, dec("50"))
        .with_rate(WorkCategory::Panni, dec("25"));

        let records = vec![
            WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
                .with_quantity(WorkCategory::Awak, 3)
                .with_quantity(WorkCategory::Jawak, 2)
                .with_quantity(WorkCategory::Panni, 4),
        ];

        let aggregate = aggregate_range(&records, &rates).unwrap();
        let split = split_range(&aggregate).unwrap();

        assert_eq!(split.online_before_tds, dec("400"));
        assert_eq!(split.tds, dec("4"));
        assert_eq!(split.cash, dec("100"));
    }

    /// PS-005: overflow is an error, never a panic
    #[test]
    fn test_overflow_is_calculation_error() {
        let result = split_payment(Decimal::MAX, Decimal::MAX, Decimal::MAX);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_cash_residual_overflow_is_calculation_error() {
        let result = split_payment(Decimal::MAX, Decimal::ZERO, Decimal::MIN);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
