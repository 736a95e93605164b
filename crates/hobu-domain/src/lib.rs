//! hobu-domain
//!
//! Pure domain models for the household period ledger (month buckets,
//! expenses, income sources, budgets, request envelopes).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod common;
pub mod expense;
pub mod income;
pub mod ledger;
pub mod period;
pub mod request;

pub use budget::*;
pub use common::*;
pub use expense::*;
pub use income::*;
pub use ledger::*;
pub use period::*;
pub use request::*;
