//! Presentation formatting for money amounts.
//!
//! Amounts are carried at full precision through every calculation and only
//! rounded here, when they are turned into text.

use rust_decimal::{Decimal, RoundingStrategy};
use thousands::{Separable, SeparatorPolicy, digits};

/// Decimal places shown for money.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Lakh and crore grouping: three digits, then pairs.
const INDIAN_GROUPING: SeparatorPolicy<'static> = SeparatorPolicy {
    separator: ",",
    groups: &[3, 2],
    digits: digits::ASCII_DECIMAL,
};

/// Formats an amount with two decimals and Indian digit grouping.
///
/// The last three integer digits form one group and every two digits before
/// them form another, so one lakh is `1,00,000.00`. Halves round away from
/// zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("1234567.891").unwrap()), "12,34,567.89");
/// assert_eq!(format_amount(Decimal::from(396)), "396.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, rounded.abs().separate_by_policy(INDIAN_GROUPING))
}

/// Formats an amount prefixed with a currency symbol, e.g. `₹ 1,250.00`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!("{} {}", symbol, format_amount(amount))
}

/// Formats an amount with a rupee sign, e.g. `₹ 1,250.00`.
pub fn format_rupees(amount: Decimal) -> String {
    format_currency(amount, "₹")
}
