//! hobu-core
//!
//! Business logic and services for the household period ledger.
//! Depends on hobu-domain. No CLI, no terminal I/O, no direct storage
//! interactions.

pub mod budget_service;
pub mod calendar;
pub mod distribution_service;
pub mod error;
pub mod expense_service;
pub mod ledger_service;
pub mod storage;
pub mod summary_service;

pub use budget_service::*;
pub use calendar::*;
pub use distribution_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use ledger_service::*;
pub use storage::*;
pub use summary_service::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber exactly once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("hobu_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("hobu core tracing initialized");
    });
}
