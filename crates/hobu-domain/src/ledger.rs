//! The ledger aggregate: a fixed, ordered universe of month buckets.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::MonthKey;
use crate::period::MonthPeriod;

const CURRENT_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The complete period universe handed between the core and the
/// persistence collaborator.
///
/// Periods are kept sorted by chronological ordinal and contain no
/// duplicate keys; both invariants are enforced at construction. The
/// core mutates fields of existing periods but never adds or removes a
/// period after provisioning.
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    periods: Vec<MonthPeriod>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(
        name: impl Into<String>,
        mut periods: Vec<MonthPeriod>,
    ) -> Result<Self, LedgerError> {
        periods.sort_by_key(|period| period.key.ordinal());
        for pair in periods.windows(2) {
            if pair[0].key == pair[1].key {
                return Err(LedgerError::DuplicatePeriod(pair[0].key));
            }
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            periods,
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        })
    }

    /// Looks up the period for `key`, if it is part of the universe.
    pub fn period(&self, key: MonthKey) -> Option<&MonthPeriod> {
        self.periods.iter().find(|period| period.key == key)
    }

    pub fn period_mut(&mut self, key: MonthKey) -> Option<&mut MonthPeriod> {
        self.periods.iter_mut().find(|period| period.key == key)
    }

    /// Chronologically ordered view over all periods.
    pub fn periods(&self) -> &[MonthPeriod] {
        &self.periods
    }

    pub fn periods_mut(&mut self) -> impl Iterator<Item = &mut MonthPeriod> {
        self.periods.iter_mut()
    }

    pub fn contains(&self, key: MonthKey) -> bool {
        self.period(key).is_some()
    }

    /// First and last month of the universe, when non-empty.
    pub fn span(&self) -> Option<(MonthKey, MonthKey)> {
        let first = self.periods.first()?.key;
        let last = self.periods.last()?.key;
        Some((first, last))
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn expense_count(&self) -> usize {
        self.periods.iter().map(|period| period.expenses.len()).sum()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`Ledger`] values.
pub enum LedgerError {
    DuplicatePeriod(MonthKey),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::DuplicatePeriod(key) => {
                write!(f, "more than one period for {}", key)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
