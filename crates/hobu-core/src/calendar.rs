//! Pure calendar arithmetic for placing ledger records.

use chrono::{Datelike, NaiveDate};

use hobu_domain::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A resolved target month and the concrete date inside it.
pub struct ResolvedDate {
    pub key: MonthKey,
    pub date: NaiveDate,
}

/// Resolves the calendar month `month_offset` months after `start`'s
/// month and builds a date on `day_of_month` there.
///
/// When the target month is shorter than `day_of_month`, the day clamps
/// to the month's last valid day; dates never roll into the following
/// month. Pure and total for any offset, including zero and negatives.
pub fn resolve(start: NaiveDate, day_of_month: u32, month_offset: i32) -> ResolvedDate {
    let mut year = start.year();
    let mut month = start.month() as i32 + month_offset;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let month = month as u32;
    let day = day_of_month.clamp(1, days_in_month(year, month));
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    ResolvedDate {
        key: MonthKey::from_date(date),
        date,
    }
}

/// Number of days in the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
