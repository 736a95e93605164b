use std::path::Path;

use hobu_domain::{Identifiable, Ledger, MonthKey};

use crate::CoreError;

/// Abstraction over persistence backends capable of storing ledger
/// snapshots. The core itself performs no I/O; callers hand each new
/// snapshot to an implementation of this trait.
pub trait SnapshotStore: Send + Sync {
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError>;
    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError>;
    fn list_ledgers(&self) -> Result<Vec<String>, CoreError>;
    fn delete_ledger(&self, name: &str) -> Result<(), CoreError>;
    fn save_to_path(&self, ledger: &Ledger, path: &Path) -> Result<(), CoreError>;
    fn load_from_path(&self, path: &Path) -> Result<Ledger, CoreError>;
}

/// Detects anomalies within a ledger snapshot.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();
    for period in ledger.periods() {
        for expense in &period.expenses {
            if MonthKey::from_date(expense.date) != period.key {
                warnings.push(format!(
                    "expense {} dated {} sits in {}",
                    expense.id(),
                    expense.date,
                    period.key.display_id()
                ));
            }
            if expense.amount < 0.0 {
                warnings.push(format!(
                    "expense {} carries a negative amount {}",
                    expense.id(),
                    expense.amount
                ));
            }
            if let Some(tag) = &expense.installment {
                if tag.index == 0 || tag.index > tag.total {
                    warnings.push(format!(
                        "expense {} carries malformed installment tag {}",
                        expense.id(),
                        tag
                    ));
                }
            }
        }
    }
    warnings
}
