//! Shared traits and the month-key primitive used across the ledger.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Normalizes monetary input at the boundary. Non-finite or negative
/// values are stored as zero and never surfaced as errors.
pub fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
/// Identifies one calendar month of the ledger by `(year, month0)`.
///
/// `month0` is zero-based (0 = January). Equality and ordering derive
/// from the pair; the display id is cosmetic only.
pub struct MonthKey {
    pub year: i32,
    pub month0: u32,
}

impl MonthKey {
    pub fn new(year: i32, month0: u32) -> Result<Self, MonthKeyError> {
        if month0 > 11 {
            return Err(MonthKeyError::MonthOutOfRange(month0));
        }
        Ok(Self { year, month0 })
    }

    /// Derives the key of the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Total chronological order: `year * 12 + month0`.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month0 as i64
    }

    /// First day of the month, used as the anchor for date resolution.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize % 12]
    }

    /// Display-only id such as `"nov-2025"`. Never use it for equality;
    /// identity is the `(year, month0)` pair.
    pub fn display_id(&self) -> String {
        let short = &self.month_name()[..3];
        format!("{}-{}", short.to_ascii_lowercase(), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`MonthKey`] values.
pub enum MonthKeyError {
    MonthOutOfRange(u32),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::MonthOutOfRange(month0) => {
                write!(f, "month index {} is outside 0..=11", month0)
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_orders_chronologically() {
        let nov_2025 = MonthKey::new(2025, 10).unwrap();
        let jan_2026 = MonthKey::new(2026, 0).unwrap();
        assert!(nov_2025 < jan_2026);
        assert_eq!(nov_2025.ordinal() + 2, jan_2026.ordinal());
    }

    #[test]
    fn month_key_rejects_out_of_range_month() {
        assert!(MonthKey::new(2026, 12).is_err());
    }

    #[test]
    fn display_id_is_short_lowercase() {
        let key = MonthKey::new(2025, 10).unwrap();
        assert_eq!(key.display_id(), "nov-2025");
        assert_eq!(key.to_string(), "November 2025");
    }

    #[test]
    fn normalize_amount_zeroes_invalid_input() {
        assert_eq!(normalize_amount(f64::NAN), 0.0);
        assert_eq!(normalize_amount(f64::INFINITY), 0.0);
        assert_eq!(normalize_amount(-10.0), 0.0);
        assert_eq!(normalize_amount(42.5), 42.5);
    }
}
