//! Calculation result models for the payroll engine.
//!
//! This module contains the derived values produced by the calculators:
//! per-day amounts, range aggregates, payment splits, and the
//! [`SalaryRangeReport`] that bundles them for a date range. None of these
//! are persisted; they are recomputed on every request.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DateRange, RateKind, WorkCategory, WorkQuantities};
use crate::error::{EngineError, EngineResult};

/// Money amounts per work category.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CategoryAmounts, WorkCategory};
/// use rust_decimal::Decimal;
///
/// let amounts = CategoryAmounts::default()
///     .with(WorkCategory::Awak, Decimal::from(300))
///     .with(WorkCategory::Jawak, Decimal::from(100));
///
/// assert_eq!(amounts.get(WorkCategory::Awak), Decimal::from(300));
/// assert_eq!(amounts.total(), Some(Decimal::from(400)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmounts {
    /// Inbound bags.
    pub awak: Decimal,
    /// Outbound bags.
    pub jawak: Decimal,
    /// Inbound dock bags.
    pub dock_awak: Decimal,
    /// Outbound dock bags.
    pub dock_jawak: Decimal,
    /// Outbound bags with a warning label.
    pub jawak_warning: Decimal,
    /// Outbound dock bags with a warning label.
    pub dock_jawak_warning: Decimal,
    /// Boxes.
    pub checkbox: Decimal,
    /// Plastic-wrapped loads.
    pub panni: Decimal,
    /// Five kilogram sacks.
    pub potti5: Decimal,
    /// Ten kilogram sacks.
    pub potti10: Decimal,
    /// Solapur consignments.
    pub solapur: Decimal,
    /// Free-form category.
    pub other: Decimal,
}

impl CategoryAmounts {
    /// Returns the amount for a category.
    pub fn get(&self, category: WorkCategory) -> Decimal {
        match category {
            WorkCategory::Awak => self.awak,
            WorkCategory::Jawak => self.jawak,
            WorkCategory::DockAwak => self.dock_awak,
            WorkCategory::DockJawak => self.dock_jawak,
            WorkCategory::JawakWarning => self.jawak_warning,
            WorkCategory::DockJawakWarning => self.dock_jawak_warning,
            WorkCategory::Checkbox => self.checkbox,
            WorkCategory::Panni => self.panni,
            WorkCategory::Potti5 => self.potti5,
            WorkCategory::Potti10 => self.potti10,
            WorkCategory::Solapur => self.solapur,
            WorkCategory::Other => self.other,
        }
    }

    /// Returns a copy with one category's amount replaced.
    pub fn with(mut self, category: WorkCategory, amount: Decimal) -> Self {
        let slot = match category {
            WorkCategory::Awak => &mut self.awak,
            WorkCategory::Jawak => &mut self.jawak,
            WorkCategory::DockAwak => &mut self.dock_awak,
            WorkCategory::DockJawak => &mut self.dock_jawak,
            WorkCategory::JawakWarning => &mut self.jawak_warning,
            WorkCategory::DockJawakWarning => &mut self.dock_jawak_warning,
            WorkCategory::Checkbox => &mut self.checkbox,
            WorkCategory::Panni => &mut self.panni,
            WorkCategory::Potti5 => &mut self.potti5,
            WorkCategory::Potti10 => &mut self.potti10,
            WorkCategory::Solapur => &mut self.solapur,
            WorkCategory::Other => &mut self.other,
        };
        *slot = amount;
        self
    }

    /// Iterates over every category and its amount.
    pub fn iter(&self) -> impl Iterator<Item = (WorkCategory, Decimal)> + '_ {
        WorkCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Sums all twelve amounts, or `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.iter()
            .try_fold(Decimal::ZERO, |acc, (_, amount)| acc.checked_add(amount))
    }

    /// Adds two sets of amounts field by field, or `None` on overflow.
    pub fn checked_add(&self, other: &CategoryAmounts) -> Option<CategoryAmounts> {
        WorkCategory::ALL
            .into_iter()
            .try_fold(CategoryAmounts::default(), |acc, c| {
                Some(acc.with(c, self.get(c).checked_add(other.get(c))?))
            })
    }
}

/// The amounts owed for one work record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAmount {
    /// The date of the record the amounts were derived from.
    pub date: NaiveDate,
    /// Quantity times rate for each category.
    pub amounts: CategoryAmounts,
    /// Sum of all category amounts.
    pub day_total: Decimal,
}

/// Totals over an ordered sequence of work records priced with one rate set.
///
/// `running_totals[i]` is the sum of `days[0..=i].day_total`, so both vectors
/// always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAggregate {
    /// The kind of rate set the range was priced with.
    pub rate_kind: RateKind,
    /// Per-record amounts, in input order.
    pub days: Vec<DailyAmount>,
    /// Cumulative day totals, in input order.
    pub running_totals: Vec<Decimal>,
    /// Sum of each quantity field across all records.
    pub quantity_totals: WorkQuantities,
    /// Sum of each category amount across all records.
    pub amount_totals: CategoryAmounts,
    /// Sum of every day total.
    pub grand_total: Decimal,
}

impl RangeAggregate {
    /// Returns an aggregate with no records and all totals at zero.
    pub fn empty(rate_kind: RateKind) -> Self {
        Self {
            rate_kind,
            days: Vec::new(),
            running_totals: Vec::new(),
            quantity_totals: WorkQuantities::default(),
            amount_totals: CategoryAmounts::default(),
            grand_total: Decimal::ZERO,
        }
    }

    /// Returns true if no records were aggregated.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// How a range's pay is routed: online after TDS, TDS withheld, and cash.
///
/// `cash` is a residual and is never clamped; a negative value signals
/// inconsistent upstream data. Use [`PaymentSplit::verify`] to turn it into
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSplit {
    /// Total amount for the `awak` category.
    pub awak_amount: Decimal,
    /// Total amount for the `jawak` category.
    pub jawak_amount: Decimal,
    /// `awak_amount + jawak_amount`.
    pub online_before_tds: Decimal,
    /// Tax deducted at source from the online amount.
    pub tds: Decimal,
    /// Online amount after TDS.
    pub online: Decimal,
    /// Everything not paid online or withheld.
    pub cash: Decimal,
}

impl PaymentSplit {
    /// Returns true if the cash residual is not negative.
    pub fn is_consistent(&self) -> bool {
        !self.cash.is_sign_negative() || self.cash.is_zero()
    }

    /// Returns `InconsistentTotals` if the cash residual is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::split_payment;
    /// use rust_decimal::Decimal;
    ///
    /// let split = split_payment(Decimal::from(300), Decimal::from(100), Decimal::from(350)).unwrap();
    /// assert!(split.verify().is_err());
    /// ```
    pub fn verify(&self) -> EngineResult<()> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(EngineError::InconsistentTotals { cash: self.cash })
        }
    }
}

/// A warning generated during calculation.
///
/// Warnings indicate data-quality issues that do not stop the calculation
/// but should be reviewed by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Builds the warning reported for a negative cash residual.
    pub fn inconsistent_totals(cash: Decimal) -> Self {
        Self {
            code: "INCONSISTENT_TOTALS".to_string(),
            message: EngineError::InconsistentTotals { cash }.to_string(),
            severity: "high".to_string(),
        }
    }
}

/// The complete salary picture for one date range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::split_payment;
/// use payroll_engine::models::{DateRange, RangeAggregate, RateKind, SalaryRangeReport};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = SalaryRangeReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     period: DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
///     )
///     .unwrap(),
///     aggregate: RangeAggregate::empty(RateKind::Private),
///     split: split_payment(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO).unwrap(),
///     warnings: vec![],
/// };
/// assert!(report.aggregate.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRangeReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
    /// The inclusive date range the report covers.
    pub period: DateRange,
    /// Quantity and amount totals over the range.
    pub aggregate: RangeAggregate,
    /// Online, TDS and cash routing of the range's pay.
    pub split: PaymentSplit,
    /// Data-quality warnings raised while computing.
    pub warnings: Vec<AuditWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn split_with_cash(cash: &str) -> PaymentSplit {
        PaymentSplit {
            awak_amount: Decimal::ZERO,
            jawak_amount: Decimal::ZERO,
            online_before_tds: Decimal::ZERO,
            tds: Decimal::ZERO,
            online: Decimal::ZERO,
            cash: dec(cash),
        }
    }

    #[test]
    fn test_category_amounts_total_sums_all_fields() {
        let amounts = WorkCategory::ALL
            .into_iter()
            .fold(CategoryAmounts::default(), |acc, c| acc.with(c, dec("1.5")));
        assert_eq!(amounts.total(), Some(dec("18.0")));
    }

    #[test]
    fn test_category_amounts_checked_add() {
        let a = CategoryAmounts::default().with(WorkCategory::Other, dec("10.25"));
        let b = CategoryAmounts::default()
            .with(WorkCategory::Other, dec("0.75"))
            .with(WorkCategory::Panni, dec("3"));

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.other, dec("11.00"));
        assert_eq!(sum.panni, dec("3"));
        assert_eq!(sum.awak, Decimal::ZERO);
    }

    #[test]
    fn test_category_amounts_overflow_returns_none() {
        let a = CategoryAmounts::default().with(WorkCategory::Awak, Decimal::MAX);
        assert!(a.checked_add(&a).is_none());
        let b = a.with(WorkCategory::Jawak, Decimal::MAX);
        assert!(b.total().is_none());
    }

    #[test]
    fn test_empty_aggregate_is_all_zero() {
        let aggregate = RangeAggregate::empty(RateKind::Public);
        assert!(aggregate.is_empty());
        assert!(aggregate.running_totals.is_empty());
        assert_eq!(aggregate.grand_total, Decimal::ZERO);
        assert_eq!(aggregate.quantity_totals, WorkQuantities::default());
    }

    #[test]
    fn test_split_consistency() {
        assert!(split_with_cash("100").is_consistent());
        assert!(split_with_cash("0").is_consistent());
        assert!(split_with_cash("-0.00").is_consistent());
        assert!(!split_with_cash("-0.01").is_consistent());
    }

    #[test]
    fn test_verify_reports_negative_cash() {
        match split_with_cash("-5.5").verify() {
            Err(EngineError::InconsistentTotals { cash }) => assert_eq!(cash, dec("-5.5")),
            other => panic!("Expected InconsistentTotals, got {:?}", other),
        }
        assert!(split_with_cash("5.5").verify().is_ok());
    }

    #[test]
    fn test_inconsistent_totals_warning() {
        let warning = AuditWarning::inconsistent_totals(dec("-2"));
        assert_eq!(warning.code, "INCONSISTENT_TOTALS");
        assert_eq!(warning.severity, "high");
        assert_eq!(warning.message, "Inconsistent totals: cash residual is -2");
    }
}
