//! Monthly period arithmetic.

use metron_core::errors::Result;

use crate::date::{days_in_month, Date, MONTH_NAMES};

/// `(year, month)` of the calendar month containing `date`.
pub fn for_date(date: Date) -> (u16, u8) {
    (date.year(), date.month())
}

/// Inclusive span: the 1st through the last calendar day of the month
/// (28, 29, 30, or 31 days).
pub fn start_end(year: u16, month: u8) -> Result<(Date, Date)> {
    let start = Date::from_ymd(year, month, 1)?;
    let end = Date::from_ymd(year, month, days_in_month(year, month))?;
    Ok((start, end))
}

/// `"August 2013"`.
pub fn display(year: u16, month: u8) -> String {
    format!("{} {year}", MONTH_NAMES[month as usize - 1])
}
