//! Range aggregation functionality.
//!
//! This module folds an ordered sequence of work records into quantity
//! totals, amount totals, and a running balance per record.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyAmount, RangeAggregate, RateSet, WorkRecord};

use super::daily_amount::{price_record, validate_rate_set};

/// Aggregates work records priced with a single rate set.
///
/// Records are processed in the order given. Callers must pass them in
/// ascending date order, since `running_totals[i]` is the balance as of the
/// i-th record. Out-of-order dates are logged but not corrected, and
/// duplicate dates are kept in input order.
///
/// Quantity totals do not depend on the rate set.
///
/// # Arguments
///
/// * `records` - Work records for one scope (an employee or the whole dock)
/// * `rate_set` - The rate set to price every record with
///
/// # Returns
///
/// A [`RangeAggregate`]. An empty slice yields zero totals and no running
/// totals. Fails with the same errors as
/// [`compute_daily_amount`](super::compute_daily_amount) on the first bad
/// record.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_range;
/// use payroll_engine::models::{RateKind, RateSet, WorkCategory, WorkRecord};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let rates = RateSet::zero(RateKind::Private, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
///     .with_rate(WorkCategory::Awak, Decimal::from(100))
///     .with_rate(WorkCategory::Jawak, Decimal::from(50));
///
/// let records = vec![
///     WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
///         .with_quantity(WorkCategory::Awak, 3)
///         .with_quantity(WorkCategory::Jawak, 2),
///     WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap())
///         .with_quantity(WorkCategory::Awak, 2)
///         .with_quantity(WorkCategory::Jawak, 1),
/// ];
///
/// let aggregate = aggregate_range(&records, &rates).unwrap();
/// assert_eq!(aggregate.running_totals, vec![Decimal::from(400), Decimal::from(650)]);
/// assert_eq!(aggregate.grand_total, Decimal::from(650));
/// assert_eq!(aggregate.quantity_totals.awak, 5);
/// ```
pub fn aggregate_range(records: &[WorkRecord], rate_set: &RateSet) -> EngineResult<RangeAggregate> {
    validate_rate_set(rate_set)?;

    let aggregate = records
        .iter()
        .try_fold(RangeAggregate::empty(rate_set.kind), |acc, record| {
            if let Some(previous) = acc.days.last() {
                if record.date < previous.date {
                    warn!(
                        previous = %previous.date,
                        next = %record.date,
                        "Work records are not in ascending date order"
                    );
                }
            }
            let daily = price_record(record, rate_set)?;
            accumulate(acc, record, daily)
        })?;

    debug!(
        kind = %aggregate.rate_kind,
        records = aggregate.days.len(),
        grand_total = %aggregate.grand_total,
        "Aggregated work records"
    );

    Ok(aggregate)
}

/// Returns a new aggregate with one more priced record folded in.
fn accumulate(
    acc: RangeAggregate,
    record: &WorkRecord,
    daily: DailyAmount,
) -> EngineResult<RangeAggregate> {
    let quantity_totals = acc
        .quantity_totals
        .checked_add(&record.quantities)
        .ok_or_else(|| overflow("quantity totals", record))?;
    let amount_totals = acc
        .amount_totals
        .checked_add(&daily.amounts)
        .ok_or_else(|| overflow("amount totals", record))?;
    let grand_total = acc
        .grand_total
        .checked_add(daily.day_total)
        .ok_or_else(|| overflow("running total", record))?;

    let RangeAggregate {
        rate_kind,
        mut days,
        mut running_totals,
        ..
    } = acc;
    days.push(daily);
    running_totals.push(grand_total);

    Ok(RangeAggregate {
        rate_kind,
        days,
        running_totals,
        quantity_totals,
        amount_totals,
        grand_total,
    })
}

fn overflow(what: &str, record: &WorkRecord) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} overflowed at record dated {}", what, record.date),
    }
}
