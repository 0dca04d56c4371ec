//! Yearly period arithmetic.

use metron_core::errors::Result;

use crate::date::Date;

/// `(year, 0)` for the calendar year containing `date`.
pub fn for_date(date: Date) -> (u16, u8) {
    (date.year(), 0)
}

/// Inclusive span: January 1 through December 31.
pub fn start_end(year: u16) -> Result<(Date, Date)> {
    Ok((
        Date::from_ymd(year, 1, 1)?,
        Date::from_ymd(year, 12, 31)?,
    ))
}

/// `"2013"`.
pub fn display(year: u16) -> String {
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_date_uses_calendar_year() {
        let d = Date::from_ymd(2013, 8, 7).unwrap();
        assert_eq!(for_date(d), (2013, 0));
    }

    #[test]
    fn span_is_whole_year() {
        let (start, end) = start_end(2013).unwrap();
        assert_eq!(start, Date::from_ymd(2013, 1, 1).unwrap());
        assert_eq!(end, Date::from_ymd(2013, 12, 31).unwrap());
    }

    #[test]
    fn display_format() {
        assert_eq!(display(2013), "2013");
    }
}
