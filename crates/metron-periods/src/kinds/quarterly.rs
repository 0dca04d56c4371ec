//! Quarterly period arithmetic.

use metron_core::errors::Result;

use crate::date::{days_in_month, Date};

/// `(year, quarter)` of the calendar quarter containing `date`.
pub fn for_date(date: Date) -> (u16, u8) {
    (date.year(), 1 + (date.month() - 1) / 3)
}

/// Inclusive span: day 1 of the quarter's first month through the last day
/// of its third month.
pub fn start_end(year: u16, quarter: u8) -> Result<(Date, Date)> {
    let first_month = 3 * quarter - 2;
    let last_month = first_month + 2;
    let start = Date::from_ymd(year, first_month, 1)?;
    let end = Date::from_ymd(year, last_month, days_in_month(year, last_month))?;
    Ok((start, end))
}

/// `"2013Q3"`.
pub fn display(year: u16, quarter: u8) -> String {
    format!("{year}Q{quarter}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_date_maps_months_to_quarters() {
        for (m, q) in [(1, 1), (3, 1), (4, 2), (8, 3), (10, 4), (12, 4)] {
            let d = Date::from_ymd(2013, m, 7).unwrap();
            assert_eq!(for_date(d), (2013, q));
        }
    }

    #[test]
    fn span_covers_three_months() {
        let (start, end) = start_end(2013, 3).unwrap();
        assert_eq!(start, Date::from_ymd(2013, 7, 1).unwrap());
        assert_eq!(end, Date::from_ymd(2013, 9, 30).unwrap());

        let (start, end) = start_end(2013, 4).unwrap();
        assert_eq!(start, Date::from_ymd(2013, 10, 1).unwrap());
        assert_eq!(end, Date::from_ymd(2013, 12, 31).unwrap());
    }

    #[test]
    fn display_format() {
        assert_eq!(display(2013, 3), "2013Q3");
    }
}
