//! Canonical period-code codec.
//!
//! A code is `<prefix>-<components>`: `W-YYYY-WW`, `M-YYYY-MM`, `Q-YYYY-Q`,
//! or `Y-YYYY`. Validation is structural (one anchored regex per kind,
//! compiled once) followed by numeric-range checks; decoding extracts the
//! year and sub-unit the calendar arithmetic works on; encoding is the exact
//! inverse, zero-padding week and month to two digits.

use std::sync::OnceLock;

use regex::Regex;

use metron_core::errors::{Error, Result};

use crate::kind::PeriodKind;

/// Years for which spans are representable ([`crate::date::Date`] range).
const YEAR_MIN: u16 = 1900;
/// See [`YEAR_MIN`].
const YEAR_MAX: u16 = 2199;

struct Grammar {
    weekly: Regex,
    monthly: Regex,
    quarterly: Regex,
    yearly: Regex,
}

fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(|| Grammar {
        weekly: Regex::new(r"^W-(\d{4})-(\d{2})$").expect("static regex"),
        monthly: Regex::new(r"^M-(\d{4})-(\d{2})$").expect("static regex"),
        quarterly: Regex::new(r"^Q-(\d{4})-(\d)$").expect("static regex"),
        yearly: Regex::new(r"^Y-(\d{4})$").expect("static regex"),
    })
}

impl Grammar {
    fn for_kind(&self, kind: PeriodKind) -> &Regex {
        match kind {
            PeriodKind::Weekly => &self.weekly,
            PeriodKind::Monthly => &self.monthly,
            PeriodKind::Quarterly => &self.quarterly,
            PeriodKind::Yearly => &self.yearly,
        }
    }
}

/// Sub-unit bounds for a kind; `None` for yearly (no sub-unit).
fn sub_unit_bounds(kind: PeriodKind) -> Option<(u8, u8)> {
    match kind {
        PeriodKind::Weekly => Some((1, 53)),
        PeriodKind::Monthly => Some((1, 12)),
        PeriodKind::Quarterly => Some((1, 4)),
        PeriodKind::Yearly => None,
    }
}

/// Validate `code` against the grammar and numeric bounds of `kind`.
pub fn validate(kind: PeriodKind, code: &str) -> Result<()> {
    decode(kind, code).map(|_| ())
}

/// Decode `code` into `(year, sub_unit)`; the sub-unit is 0 for yearly.
///
/// Fails with [`Error::MalformedCode`] on a grammar mismatch and
/// [`Error::OutOfRange`] when a component is outside its bounds.
pub fn decode(kind: PeriodKind, code: &str) -> Result<(u16, u8)> {
    let caps = grammar()
        .for_kind(kind)
        .captures(code)
        .ok_or_else(|| Error::MalformedCode(code.to_string()))?;
    let year: u16 = caps[1].parse().expect("captured \\d{4}");
    metron_core::ensure!(
        (YEAR_MIN..=YEAR_MAX).contains(&year),
        "year {year} in {code} outside [{YEAR_MIN}, {YEAR_MAX}]"
    );
    let sub = match sub_unit_bounds(kind) {
        None => 0,
        Some((min, max)) => {
            let sub: u8 = caps[2].parse().expect("captured digits");
            metron_core::ensure!(
                (min..=max).contains(&sub),
                "{} {sub} in {code} outside [{min}, {max}]",
                kind.name().trim_end_matches("ly")
            );
            sub
        }
    };
    Ok((year, sub))
}

/// Encode `(year, sub_unit)` as the canonical code of `kind`.
pub fn encode(kind: PeriodKind, year: u16, sub: u8) -> String {
    match kind {
        PeriodKind::Weekly => format!("W-{year:04}-{sub:02}"),
        PeriodKind::Monthly => format!("M-{year:04}-{sub:02}"),
        PeriodKind::Quarterly => format!("Q-{year:04}-{sub}"),
        PeriodKind::Yearly => format!("Y-{year:04}"),
    }
}
