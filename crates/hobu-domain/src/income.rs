//! Named income contributions for a single month.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::normalize_amount;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// A named set of numeric income contributions. Total income is the
/// sum of all contributions.
pub struct IncomeSources {
    entries: BTreeMap<String, f64>,
}

impl IncomeSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut sources = Self::new();
        for (name, amount) in entries {
            sources.set(name, amount);
        }
        sources
    }

    /// Sets one contribution. Invalid monetary input is stored as zero.
    pub fn set(&mut self, source: impl Into<String>, amount: f64) {
        self.entries.insert(source.into(), normalize_amount(amount));
    }

    /// Returns the contribution for `source`, or zero when absent.
    pub fn get(&self, source: &str) -> f64 {
        self.entries.get(source).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_contributions() {
        let income = IncomeSources::from_entries([
            ("salary_fixed", 3500.0),
            ("salary_variable", 500.0),
            ("others", 0.0),
        ]);
        assert_eq!(income.total(), 4000.0);
        assert_eq!(income.len(), 3);
    }

    #[test]
    fn set_normalizes_invalid_input_to_zero() {
        let mut income = IncomeSources::new();
        income.set("salary", f64::NAN);
        assert_eq!(income.get("salary"), 0.0);
        income.set("salary", -100.0);
        assert_eq!(income.get("salary"), 0.0);
        income.set("salary", 2500.0);
        assert_eq!(income.total(), 2500.0);
    }

    #[test]
    fn missing_source_reads_as_zero() {
        let income = IncomeSources::new();
        assert_eq!(income.get("unknown"), 0.0);
        assert!(income.is_empty());
    }
}
