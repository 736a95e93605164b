use hobu_domain::{LedgerError, MonthKey};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Period not provisioned: {0}")]
    PeriodNotProvisioned(MonthKey),
    #[error("Duplicate period: {0}")]
    DuplicatePeriod(MonthKey),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<LedgerError> for CoreError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::DuplicatePeriod(key) => CoreError::DuplicatePeriod(key),
        }
    }
}
