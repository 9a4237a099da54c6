//! Daily amount calculation functionality.
//!
//! This module prices one day's work record against a rate set.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryAmounts, DailyAmount, RateSet, WorkCategory, WorkRecord};

/// Calculates the amount owed for one work record.
///
/// Each fixed category is paid `quantity × rate` from the rate set. The
/// `other` category is paid at the record's own `other_rate`, or zero when
/// the record has none; it never falls back to a shared rate. Amounts are
/// kept at full decimal precision.
///
/// # Arguments
///
/// * `record` - The day's work quantities
/// * `rate_set` - The resolved rate set to price with
///
/// # Returns
///
/// A [`DailyAmount`] with twelve category amounts and their sum, or:
/// - `InvalidQuantity` if any quantity is negative
/// - `InvalidRate` if any rate in the set, or the record's `other_rate`, is negative
/// - `CalculationError` if an amount overflows
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_daily_amount;
/// use payroll_engine::models::{RateKind, RateSet, WorkCategory, WorkRecord};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let rates = RateSet::zero(RateKind::Private, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
///     .with_rate(WorkCategory::Awak, Decimal::from(100))
///     .with_rate(WorkCategory::Jawak, Decimal::from(50));
///
/// let record = WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
///     .with_quantity(WorkCategory::Awak, 3)
///     .with_quantity(WorkCategory::Jawak, 2);
///
/// let daily = compute_daily_amount(&record, &rates).unwrap();
/// assert_eq!(daily.amounts.awak, Decimal::from(300));
/// assert_eq!(daily.amounts.jawak, Decimal::from(100));
/// assert_eq!(daily.day_total, Decimal::from(400));
/// ```
pub fn compute_daily_amount(record: &WorkRecord, rate_set: &RateSet) -> EngineResult<DailyAmount> {
    validate_rate_set(rate_set)?;
    price_record(record, rate_set)
}

/// Rejects a rate set carrying any negative rate.
pub(crate) fn validate_rate_set(rate_set: &RateSet) -> EngineResult<()> {
    match rate_set.rates().find(|(_, rate)| is_negative(*rate)) {
        Some((category, rate)) => Err(EngineError::InvalidRate { category, rate }),
        None => Ok(()),
    }
}

/// Prices a record against a rate set already checked by [`validate_rate_set`].
pub(crate) fn price_record(record: &WorkRecord, rate_set: &RateSet) -> EngineResult<DailyAmount> {
    if let Some((category, quantity)) = record.quantities.iter().find(|(_, q)| *q < 0) {
        return Err(EngineError::InvalidQuantity {
            date: record.date,
            category,
            quantity,
        });
    }

    let other_rate = record.other_rate.unwrap_or(Decimal::ZERO);
    if is_negative(other_rate) {
        return Err(EngineError::InvalidRate {
            category: WorkCategory::Other,
            rate: other_rate,
        });
    }

    let amounts = WorkCategory::ALL
        .into_iter()
        .try_fold(CategoryAmounts::default(), |acc, category| {
            // Only `Other` is missing from the shared table.
            let rate = rate_set.rate(category).unwrap_or(other_rate);
            let quantity = record.quantities.get(category);
            let amount = Decimal::from(quantity)
                .checked_mul(rate)
                .ok_or_else(|| overflow(format!("{} × {} for '{}'", quantity, rate, category)))?;
            Ok::<_, EngineError>(acc.with(category, amount))
        })?;

    let day_total = amounts
        .total()
        .ok_or_else(|| overflow(format!("day total on {}", record.date)))?;

    Ok(DailyAmount {
        date: record.date,
        amounts,
        day_total,
    })
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

fn overflow(what: String) -> EngineError {
    EngineError::CalculationError {
        message: format!("amount overflow computing {}", what),
    }
}
