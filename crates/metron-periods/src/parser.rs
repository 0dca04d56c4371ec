//! Heuristic free-text period parsing.
//!
//! [`parse`] tries a fixed priority order of interpretations:
//!
//! 1. weekly — `2015-W03`, `2015W3`
//! 2. quarterly — `2015Q1`, `2015q1`
//! 3. yearly — `2015`
//! 4. monthly fallback — `Jan 2015`, `January 2015`, `1/2015`, `01/2015`
//!
//! No match is `Ok(None)`, not an error; callers must treat absence as
//! "unparseable". A candidate that matches a branch's shape but fails code
//! validation (`2015Q5`, `2015W60`) surfaces as a validation error.

use std::sync::OnceLock;

use regex::Regex;

use metron_core::errors::Result;

use crate::codec;
use crate::date::MONTH_NAMES;
use crate::kind::PeriodKind;
use crate::period::Period;

struct Patterns {
    // 2015-W03, 2015W3
    weekly: Regex,
    // 2015Q1, 2015q1
    quarterly: Regex,
    // 2015
    yearly: Regex,
    // Jan 2015, January 2015
    month_name_year: Regex,
    // 1/2015, 01/2015
    month_number_year: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        weekly: Regex::new(r"^(\d{4})-?W(\d{1,2})$").expect("static regex"),
        quarterly: Regex::new(r"^(\d{4})[Qq](\d)$").expect("static regex"),
        yearly: Regex::new(r"^\d{4}$").expect("static regex"),
        month_name_year: Regex::new(r"^([A-Za-z]{3,})\.?\s+(\d{4})$").expect("static regex"),
        month_number_year: Regex::new(r"^(\d{1,2})/(\d{4})$").expect("static regex"),
    })
}

/// Interpret a human-entered string as a period.
///
/// Returns `Ok(None)` when no interpretation matches, and an error only when
/// a matched candidate fails validation.
pub fn parse(input: &str) -> Result<Option<Period>> {
    let input = input.trim();
    let pat = patterns();

    let candidate = if let Some(caps) = pat.weekly.captures(input) {
        Some(codec::encode(
            PeriodKind::Weekly,
            year_of(&caps[1]),
            number_of(&caps[2]),
        ))
    } else if let Some(caps) = pat.quarterly.captures(input) {
        Some(codec::encode(
            PeriodKind::Quarterly,
            year_of(&caps[1]),
            number_of(&caps[2]),
        ))
    } else if pat.yearly.is_match(input) {
        Some(codec::encode(PeriodKind::Yearly, year_of(input), 0))
    } else {
        month_fallback(input)
    };

    match candidate {
        Some(code) => Period::from_code(&code).map(Some),
        None => Ok(None),
    }
}

/// The monthly fallback: month-name + year, or numeric month/year.
///
/// The original fed anything reaching this branch to a general
/// natural-language date parser; the shapes it documented are covered here
/// directly, and anything else is simply no result.
fn month_fallback(input: &str) -> Option<String> {
    let pat = patterns();
    if let Some(caps) = pat.month_name_year.captures(input) {
        let month = month_by_prefix(&caps[1])?;
        return Some(codec::encode(PeriodKind::Monthly, year_of(&caps[2]), month));
    }
    if let Some(caps) = pat.month_number_year.captures(input) {
        let month = number_of(&caps[1]);
        if (1..=12).contains(&month) {
            return Some(codec::encode(PeriodKind::Monthly, year_of(&caps[2]), month));
        }
    }
    None
}

/// Match a month by case-insensitive name prefix (at least three letters,
/// which is always unambiguous: `jan`, `aug`, `sept`, `december`, …).
fn month_by_prefix(token: &str) -> Option<u8> {
    let token = token.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.to_ascii_lowercase().starts_with(&token))
        .map(|idx| idx as u8 + 1)
}

fn year_of(digits: &str) -> u16 {
    digits.parse().expect("captured \\d{4}")
}

fn number_of(digits: &str) -> u8 {
    digits.parse().expect("captured 1-2 digits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_core::Error;

    fn parsed(input: &str) -> String {
        parse(input)
            .unwrap()
            .unwrap_or_else(|| panic!("no result for {input:?}"))
            .code()
            .to_string()
    }

    #[test]
    fn weekly_shapes() {
        assert_eq!(parsed("2015-W03"), "W-2015-03");
        assert_eq!(parsed("2015-W3"), "W-2015-03");
        assert_eq!(parsed("2015W03"), "W-2015-03");
        assert_eq!(parsed("2015W3"), "W-2015-03");
    }

    #[test]
    fn quarterly_shapes() {
        assert_eq!(parsed("2015Q1"), "Q-2015-1");
        assert_eq!(parsed("2015q4"), "Q-2015-4");
    }

    #[test]
    fn yearly_shape() {
        assert_eq!(parsed("2015"), "Y-2015");
    }

    #[test]
    fn monthly_fallback_shapes() {
        assert_eq!(parsed("Jan 2015"), "M-2015-01");
        assert_eq!(parsed("January 2015"), "M-2015-01");
        assert_eq!(parsed("august 2015"), "M-2015-08");
        assert_eq!(parsed("Sept 2015"), "M-2015-09");
        assert_eq!(parsed("1/2015"), "M-2015-01");
        assert_eq!(parsed("01/2015"), "M-2015-01");
        assert_eq!(parsed("12/2015"), "M-2015-12");
    }

    #[test]
    fn matched_but_invalid_candidates_fail_validation() {
        assert!(matches!(parse("2015Q5"), Err(Error::OutOfRange(_))));
        assert!(matches!(parse("2015W60"), Err(Error::OutOfRange(_))));
        assert!(matches!(parse("2015-W00"), Err(Error::OutOfRange(_))));
        // A 4-digit numeral outside the supported calendar range
        assert!(matches!(parse("0123"), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn unparseable_input_is_no_result() {
        for input in [
            "not-a-period",
            "",
            "  ",
            "13/2015",
            "Janx 2015",
            "2015-",
            "W-2015", // canonical codes are not free text
            "20155",
        ] {
            assert_eq!(parse(input).unwrap(), None, "expected no result for {input:?}");
        }
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(parsed("  2015Q1  "), "Q-2015-1");
    }
}
