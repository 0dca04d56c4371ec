//! `Date` — a calendar date represented as a serial number.
//!
//! Serial 1 is **January 1, 1900** (a Monday); the valid range runs through
//! December 31, 2199. Period arithmetic only ever needs whole calendar days,
//! so a single `i32` day count is the entire representation.
//!
//! This module also holds the ISO-8601 week-numbering routines the weekly
//! period kind is built on: a date near a year boundary can belong to a week
//! of the adjacent year, and an ISO year has either 52 or 53 weeks.

use metron_core::errors::{Error, Result};
use metron_core::Settings;

/// A calendar date represented as a serial number of days.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900 (serial 1).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is before [`Date::MIN`] or after
    /// [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside supported range"
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1900–2199), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Return "today": the [`Settings`] evaluation-date override if one is
    /// set, otherwise the system clock.
    pub fn today() -> Self {
        if let Some(serial) = Settings::instance().evaluation_date_serial() {
            return Date(serial);
        }
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Date(UNIX_EPOCH_SERIAL + (secs / 86_400) as i32)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the calendar year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16 + MONTH_OFFSET[m as usize - 1];
        if m > 2 && is_leap_year(y) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday ordinal, 1 = Monday … 7 = Sunday.
    pub fn weekday(&self) -> u8 {
        weekday_of_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`,
    /// positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── ISO-8601 week numbering ──────────────────────────────────────────────

    /// Return the ISO week-numbering `(year, week)` of this date.
    ///
    /// Week 1 is the week containing the year's first Thursday, so the last
    /// days of December can belong to week 1 of the next year and the first
    /// days of January to week 52/53 of the previous one.
    pub fn iso_week_date(&self) -> (u16, u8) {
        let (y, _, _) = ymd_from_serial(self.0);
        let week = (self.day_of_year() as i32 - self.weekday() as i32 + 10) / 7;
        if week < 1 {
            (y - 1, weeks_in_iso_year(y - 1))
        } else if week > weeks_in_iso_year(y) as i32 {
            (y + 1, 1)
        } else {
            (y, week as u8)
        }
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── ISO week helpers ──────────────────────────────────────────────────────────

/// Number of ISO weeks (52 or 53) in the given ISO year.
///
/// A year has 53 weeks iff January 1 falls on a Thursday, or on a Wednesday
/// in a leap year — equivalently, iff December 31 lands in ISO week 53.
pub fn weeks_in_iso_year(year: u16) -> u8 {
    match weekday_of_serial(serial_from_ymd(year, 1, 1)) {
        4 => 53,
        3 if is_leap_year(year) => 53,
        _ => 52,
    }
}

/// Return the Monday starting the given ISO week.
///
/// January 4 is in week 1 by definition: step back to the Monday of its
/// week, then advance `(week − 1)` whole weeks.
pub fn date_from_iso_week(iso_year: u16, week: u8) -> Result<Date> {
    let fourth_jan = Date::from_ymd(iso_year, 1, 4)?;
    let week1_monday = fourth_jan.serial() - (fourth_jan.weekday() as i32 - 1);
    Date::from_serial(week1_monday + 7 * (week as i32 - 1))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Serial of 1970-01-01 (used by `Date::today`).
const UNIX_EPOCH_SERIAL: i32 = 25_568;

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Weekday ordinal (1 = Monday … 7 = Sunday) of a serial number.
///
/// Works for any serial, in or out of the supported date range; the epoch
/// (serial 1 = 1900-01-01) is a Monday.
fn weekday_of_serial(serial: i32) -> u8 {
    ((serial - 1).rem_euclid(7) + 1) as u8
}

/// Convert (year, month, day) to a serial number (serial 1 = 1900-01-01).
///
/// Pure arithmetic: callers may pass years adjacent to the supported range
/// (the ISO helpers do) as long as the result is only used for weekday math.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // Leap days in [1900, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    debug_assert!(serial >= Date::MIN.0 && serial <= Date::MAX.0);
    let mut y = (serial / 365 + 1900) as u16;
    // The estimate can be off by one around January 1.
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    while remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Full month names, January first.
pub(crate) const MONTH_NAMES: [&str; 12] = [
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

/// Three-letter month abbreviations, January first.
pub(crate) const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ── Tests ─────────────────────────────────────────────────────────────────────
