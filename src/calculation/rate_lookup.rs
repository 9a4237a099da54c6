//! Rate lookup functionality.
//!
//! This module provides the [`RateSource`] contract the engine resolves
//! rates through, an in-memory append-only [`RateTable`] implementing it,
//! and [`resolve_rate`], which turns a missing rate into an explicit error.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{RateKind, RateSet};

/// Anything that can report the current rate set of a kind.
///
/// Implemented by [`RateTable`]; a data layer backed by remote storage can
/// implement it too and be passed straight to [`resolve_rate`].
pub trait RateSource {
    /// Returns the most recently created rate set of `kind`, if any.
    fn latest_rate(&self, kind: RateKind) -> Option<RateSet>;
}

/// Append-only history of rate sets, ordered by creation time.
///
/// Rates are never edited in place; recording a new rate set makes it the
/// current one for its kind. When two sets share a creation time the one
/// recorded last wins.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::RateTable;
/// use payroll_engine::models::{RateKind, RateSet, WorkCategory};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let mut table = RateTable::new();
/// table.record(RateSet::zero(RateKind::Private, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
/// table.record(
///     RateSet::zero(RateKind::Private, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap())
///         .with_rate(WorkCategory::Awak, Decimal::from(12)),
/// );
///
/// let current = table.latest(RateKind::Private).unwrap();
/// assert_eq!(current.awak, Decimal::from(12));
/// assert!(table.latest(RateKind::Public).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    /// Rate sets sorted by `created_at`, oldest first.
    history: Vec<RateSet>,
}

impl RateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from rate sets in any order.
    ///
    /// The sort is stable, so sets with equal creation times keep their
    /// relative order and the later one stays current.
    pub fn from_history(rates: Vec<RateSet>) -> Self {
        let mut history = rates;
        history.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Self { history }
    }

    /// Records a new rate set.
    pub fn record(&mut self, rate_set: RateSet) {
        let position = self
            .history
            .partition_point(|r| r.created_at <= rate_set.created_at);
        if position < self.history.len() {
            warn!(
                kind = %rate_set.kind,
                created_at = %rate_set.created_at,
                "Recording rate set older than the newest entry"
            );
        }
        self.history.insert(position, rate_set);
    }

    /// Returns the current rate set of a kind.
    pub fn latest(&self, kind: RateKind) -> Option<&RateSet> {
        self.history.iter().rev().find(|r| r.kind == kind)
    }

    /// Iterates over every rate set of a kind, oldest first.
    pub fn history(&self, kind: RateKind) -> impl Iterator<Item = &RateSet> + '_ {
        self.history.iter().filter(move |r| r.kind == kind)
    }

    /// Returns the number of recorded rate sets across both kinds.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns true if no rate set has been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl RateSource for RateTable {
    fn latest_rate(&self, kind: RateKind) -> Option<RateSet> {
        self.latest(kind).cloned()
    }
}

/// Resolves the rate set to compute with.
///
/// # Arguments
///
/// * `source` - Where rate sets are looked up
/// * `kind` - Public or private; always passed explicitly by the caller
///
/// # Returns
///
/// The most recently created rate set of `kind`, or `RateNotConfigured` if
/// none exists. Salaries are never computed against implicit zero rates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{RateTable, resolve_rate};
/// use payroll_engine::error::EngineError;
/// use payroll_engine::models::RateKind;
///
/// let table = RateTable::new();
/// let result = resolve_rate(&table, RateKind::Private);
/// assert!(matches!(result, Err(EngineError::RateNotConfigured { kind: RateKind::Private })));
/// ```
pub fn resolve_rate<S: RateSource + ?Sized>(source: &S, kind: RateKind) -> EngineResult<RateSet> {
    match source.latest_rate(kind) {
        Some(rate_set) => {
            debug!(kind = %kind, created_at = %rate_set.created_at, "Resolved rate set");
            Ok(rate_set)
        }
        None => {
            warn!(kind = %kind, "No rate set configured");
            Err(EngineError::RateNotConfigured { kind })
        }
    }
}
