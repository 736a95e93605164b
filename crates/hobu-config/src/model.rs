use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences and seed defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledgers. Defaults to
    /// `~/Documents/Ledgers`.
    pub ledger_root: Option<PathBuf>,
    #[serde(default)]
    pub seed: SeedDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            ledger_root: None,
            seed: SeedDefaults::default(),
        }
    }
}

impl Config {
    pub fn resolve_ledger_root(&self) -> PathBuf {
        if let Some(path) = &self.ledger_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Ledgers")
    }
}

/// Defaults used when provisioning a fresh period universe: the first
/// month, how many consecutive months to create, and the named income
/// contributions each month starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedDefaults {
    pub start_year: i32,
    /// Zero-based month index (0 = January).
    pub start_month0: u32,
    pub months: u32,
    #[serde(default)]
    pub income: BTreeMap<String, f64>,
}

impl Default for SeedDefaults {
    fn default() -> Self {
        let mut income = BTreeMap::new();
        income.insert("salary_primary".to_string(), 0.0);
        income.insert("salary_secondary".to_string(), 0.0);
        income.insert("others".to_string(), 0.0);
        Self {
            start_year: 2025,
            start_month0: 10,
            months: 12,
            income,
        }
    }
}
