//! Weekly period arithmetic (ISO-8601 week numbering).

use metron_core::errors::Result;

use crate::codec;
use crate::date::{date_from_iso_week, Date, MONTH_ABBREV};
use crate::kind::PeriodKind;

/// `(year, week)` of the ISO week containing `date`.
///
/// Near year boundaries the ISO week-numbering year differs from the
/// calendar year: December 30, 2014 maps to `W-2015-01`.
pub fn for_date(date: Date) -> (u16, u8) {
    date.iso_week_date()
}

/// Inclusive span of the week: its Monday through the following Sunday.
pub fn start_end(year: u16, week: u8) -> Result<(Date, Date)> {
    let start = date_from_iso_week(year, week)?;
    Ok((start, start.add_days(6)?))
}

/// `"Week of Aug 05, 2013"` — named after the week's Monday.
///
/// Falls back to the canonical code for the handful of codes at the edge of
/// the supported date range whose Monday is not representable.
pub fn display(year: u16, week: u8) -> String {
    match date_from_iso_week(year, week) {
        Ok(monday) => format!(
            "Week of {} {:02}, {}",
            MONTH_ABBREV[monday.month() as usize - 1],
            monday.day_of_month(),
            monday.year()
        ),
        Err(_) => codec::encode(PeriodKind::Weekly, year, week),
    }
}
