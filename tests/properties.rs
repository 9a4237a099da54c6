//! Property tests for the salary calculations.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{aggregate_range, compute_daily_amount, split_range};
use payroll_engine::models::{RateKind, RateSet, WorkCategory, WorkQuantities, WorkRecord};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

/// Rates in paise, so every generated rate has two decimal places.
fn rate_set_strategy() -> impl Strategy<Value = RateSet> {
    prop::collection::vec(0i64..1_000, WorkCategory::FIXED.len()).prop_map(|paise| {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        WorkCategory::FIXED
            .into_iter()
            .zip(paise)
            .fold(RateSet::zero(RateKind::Private, created_at), |rates, (c, p)| {
                rates.with_rate(c, Decimal::new(p, 2))
            })
    })
}

fn record_strategy(day: i64) -> impl Strategy<Value = WorkRecord> {
    (
        prop::collection::vec(0i64..500, WorkCategory::ALL.len()),
        0i64..1_000,
    )
        .prop_map(move |(quantities, other_paise)| {
            let date = base_date() + Duration::days(day);
            WorkCategory::ALL
                .into_iter()
                .zip(quantities)
                .fold(WorkRecord::new(date), |record, (c, q)| {
                    record.with_quantity(c, q)
                })
                .with_other_rate(Decimal::new(other_paise, 2))
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<WorkRecord>> {
    (0usize..20).prop_flat_map(|len| {
        (0..len as i64)
            .map(record_strategy)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn zero_quantities_price_to_zero(rates in rate_set_strategy(), day in 0i64..365) {
        let record = WorkRecord::new(base_date() + Duration::days(day));
        let daily = compute_daily_amount(&record, &rates).unwrap();

        prop_assert_eq!(daily.day_total, Decimal::ZERO);
    }

    #[test]
    fn day_total_is_sum_of_category_amounts(
        rates in rate_set_strategy(),
        record in record_strategy(0),
    ) {
        let daily = compute_daily_amount(&record, &rates).unwrap();
        let sum: Decimal = daily.amounts.iter().map(|(_, amount)| amount).sum();

        prop_assert_eq!(daily.day_total, sum);
    }

    #[test]
    fn running_totals_never_decrease(
        rates in rate_set_strategy(),
        records in records_strategy(),
    ) {
        let aggregate = aggregate_range(&records, &rates).unwrap();

        prop_assert_eq!(aggregate.running_totals.len(), records.len());
        for pair in aggregate.running_totals.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn grand_total_equals_last_running_total(
        rates in rate_set_strategy(),
        records in records_strategy(),
    ) {
        let aggregate = aggregate_range(&records, &rates).unwrap();
        let last = aggregate.running_totals.last().copied().unwrap_or(Decimal::ZERO);

        prop_assert_eq!(aggregate.grand_total, last);
    }

    #[test]
    fn quantity_totals_do_not_depend_on_rates(
        first in rate_set_strategy(),
        second in rate_set_strategy(),
        records in records_strategy(),
    ) {
        let a = aggregate_range(&records, &first).unwrap();
        let b = aggregate_range(&records, &second).unwrap();

        prop_assert_eq!(a.quantity_totals, b.quantity_totals);
    }

    #[test]
    fn split_components_add_up_to_grand_total(
        rates in rate_set_strategy(),
        records in records_strategy(),
    ) {
        let aggregate = aggregate_range(&records, &rates).unwrap();
        let split = split_range(&aggregate).unwrap();

        prop_assert_eq!(split.online + split.tds + split.cash, aggregate.grand_total);
        prop_assert!(split.verify().is_ok());
    }
}

#[test]
fn empty_range_aggregates_to_zero() {
    let rates = RateSet::zero(RateKind::Public, Utc::now());
    let aggregate = aggregate_range(&[], &rates).unwrap();

    assert!(aggregate.days.is_empty());
    assert_eq!(aggregate.quantity_totals, WorkQuantities::default());
    assert_eq!(aggregate.grand_total, Decimal::ZERO);
}
