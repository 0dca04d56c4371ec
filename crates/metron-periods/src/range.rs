//! Period range enumeration.
//!
//! [`PeriodRange`] is a plain finite iterator: forward-only, consumed once,
//! and exhaustion is ordinary termination. Re-enumeration means calling
//! [`period_range`] again.

use metron_core::errors::{Error, Result};

use crate::codec;
use crate::date::weeks_in_iso_year;
use crate::kind::PeriodKind;
use crate::period::Period;
use crate::registry;

/// Lazy, increasing sequence of same-kind periods.
#[derive(Debug, Clone)]
pub struct PeriodRange {
    kind: PeriodKind,
    /// Next `(year, sub_unit)` to yield; `None` once exhausted.
    cursor: Option<(u16, u8)>,
    stop: (u16, u8),
    inclusive: bool,
}

/// Enumerate the periods from `start` up to `stop`, excluding `stop` unless
/// `inclusive` is set.
///
/// Both codes are validated; they must share a kind (detected by prefix) or
/// the call fails with a kind-mismatch error. The sequence is empty when
/// `start` is not below `stop` (or not at-or-below it, when inclusive).
pub fn period_range(start: &str, stop: &str, inclusive: bool) -> Result<PeriodRange> {
    let kind = registry::kind_for_code(start)?;
    let stop_kind = registry::kind_for_code(stop)?;
    if kind != stop_kind {
        return Err(Error::KindMismatch(format!(
            "{start} and {stop} must be of the same period kind"
        )));
    }
    let cursor = codec::decode(kind, start)?;
    let stop = codec::decode(kind, stop)?;
    Ok(PeriodRange::from_parts(kind, cursor, stop, inclusive))
}

impl PeriodRange {
    /// Build directly from decoded `(year, sub_unit)` endpoints.
    ///
    /// Sub-period decomposition uses this: its endpoints come from `for_date`
    /// rather than raw codes, and the closing week of a container at the top
    /// of the calendar range belongs to the following ISO year, which a
    /// raw-code round trip would reject.
    pub(crate) fn from_parts(
        kind: PeriodKind,
        start: (u16, u8),
        stop: (u16, u8),
        inclusive: bool,
    ) -> Self {
        PeriodRange {
            kind,
            cursor: Some(start),
            stop,
            inclusive,
        }
    }
}

impl Iterator for PeriodRange {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let cur = self.cursor?;
        let in_range = if self.inclusive {
            cur <= self.stop
        } else {
            cur < self.stop
        };
        if !in_range {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(advance(self.kind, cur));
        Some(Period::from_canonical_parts(self.kind, cur.0, cur.1))
    }
}

impl std::iter::FusedIterator for PeriodRange {}

/// Step `(year, sub_unit)` to the next period of `kind`.
///
/// The weekly rollover point depends on how many ISO weeks (52 or 53) the
/// current iteration year has.
fn advance(kind: PeriodKind, (year, sub): (u16, u8)) -> (u16, u8) {
    match kind {
        PeriodKind::Weekly => {
            if sub >= weeks_in_iso_year(year) {
                (year + 1, 1)
            } else {
                (year, sub + 1)
            }
        }
        PeriodKind::Monthly => {
            if sub == 12 {
                (year + 1, 1)
            } else {
                (year, sub + 1)
            }
        }
        PeriodKind::Quarterly => {
            if sub == 4 {
                (year + 1, 1)
            } else {
                (year, sub + 1)
            }
        }
        PeriodKind::Yearly => (year + 1, 0),
    }
}
