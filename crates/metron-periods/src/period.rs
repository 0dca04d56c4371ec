//! `Period` — an immutable, validated calendar period.

use std::cmp::Ordering;
use std::str::FromStr;

use metron_core::errors::{Error, Result};

use crate::codec;
use crate::date::Date;
use crate::kind::PeriodKind;
use crate::kinds;
use crate::range::PeriodRange;
use crate::registry;

/// An immutable period value: a validated canonical code plus its kind.
///
/// Two periods are equal iff they have the same kind and the same code.
/// Ordering is defined only *within* a kind, by comparison of the underlying
/// codes (which sorts chronologically because the components are
/// zero-padded); [`PartialOrd::partial_cmp`] returns `None` across kinds, so
/// all four comparison operators evaluate false between, say, a month and a
/// year. That is a deliberate, documented simplification — not true calendar
/// ordering across kinds — and is why `Ord` is not implemented.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Period {
    kind: PeriodKind,
    code: String,
    year: u16,
    sub: u8,
}

impl Period {
    /// Construct from a canonical code, validating it.
    ///
    /// Fails fast on an unknown prefix, a grammar mismatch, or an
    /// out-of-range component.
    pub fn from_code(code: &str) -> Result<Self> {
        let kind = registry::kind_for_code(code)?;
        let (year, sub) = codec::decode(kind, code)?;
        Ok(Period {
            kind,
            code: code.to_string(),
            year,
            sub,
        })
    }

    /// Construct from parts produced by `for_date` or range enumeration —
    /// never from user input.
    pub(crate) fn from_canonical_parts(kind: PeriodKind, year: u16, sub: u8) -> Self {
        Period {
            kind,
            code: codec::encode(kind, year, sub),
            year,
            sub,
        }
    }

    /// The period of `kind` containing "today" (the ambient clock reading —
    /// the [`Settings`](metron_core::Settings) override when set, otherwise
    /// the system clock).
    pub fn current(kind: PeriodKind) -> Self {
        kind.for_date(Date::today())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The canonical code (the wire/storage representation).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The period's kind.
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// The inclusive `[start, end]` calendar span this period covers.
    pub fn start_end(&self) -> Result<(Date, Date)> {
        let (year, sub) = self.parts();
        match self.kind {
            PeriodKind::Weekly => kinds::weekly::start_end(year, sub),
            PeriodKind::Monthly => kinds::monthly::start_end(year, sub),
            PeriodKind::Quarterly => kinds::quarterly::start_end(year, sub),
            PeriodKind::Yearly => kinds::yearly::start_end(year),
        }
    }

    /// First day of the span.
    pub fn start(&self) -> Result<Date> {
        self.start_end().map(|(s, _)| s)
    }

    /// Last day of the span.
    pub fn end(&self) -> Result<Date> {
        self.start_end().map(|(_, e)| e)
    }

    // ── Containment ──────────────────────────────────────────────────────────

    /// Whether this period's span covers `other`'s.
    ///
    /// True when the two are equal, or when `other`'s kind is an allowed
    /// sub-kind of this one's and its span lies within this span (inclusive
    /// on both ends). One-directional: a finer period never includes a
    /// coarser one.
    pub fn includes(&self, other: &Period) -> bool {
        if self == other {
            return true;
        }
        if !self.kind.sub_kinds().contains(&other.kind) {
            return false;
        }
        match (self.start_end(), other.start_end()) {
            (Ok((start, end)), Ok((other_start, other_end))) => {
                start <= other_start && end >= other_end
            }
            _ => false,
        }
    }

    /// Fail unless this period is of the given kind.
    ///
    /// Callers that accept any code but operate on one kind (a weekly report
    /// handler fed a quarterly code, say) use this to reject the mismatch up
    /// front instead of producing an empty result.
    pub fn validate_for(&self, kind: PeriodKind) -> Result<()> {
        if self.kind != kind {
            return Err(Error::Containment(format!(
                "expected a {kind} period, got {} ({})",
                self.kind, self.code
            )));
        }
        Ok(())
    }

    /// Fail unless `kind` periods may exist within this period's kind.
    pub fn validate_can_contain(&self, kind: PeriodKind) -> Result<()> {
        if !self.kind.can_contain(kind) {
            return Err(Error::Containment(format!(
                "{kind} periods cannot exist within a {} period",
                self.kind
            )));
        }
        Ok(())
    }

    /// Decompose into the `kind` periods covering this period's span,
    /// calendar-ascending.
    ///
    /// With `kind` equal to this period's own kind the result is just the
    /// period itself. Otherwise the endpoints are the `kind` periods
    /// containing the span's first and last day, and everything between is
    /// enumerated inclusively — so the first element can start before this
    /// period does and the last can end after it (a year's first ISO week
    /// often starts in December, and its last days can fall in week 1 of the
    /// next ISO year).
    pub fn sub_periods(&self, kind: PeriodKind) -> Result<Vec<Period>> {
        self.validate_can_contain(kind)?;
        if kind == self.kind {
            return Ok(vec![self.clone()]);
        }
        // Endpoints go in as decoded parts, not re-validated codes: the
        // closing week of a year-2199 container belongs to ISO year 2200,
        // which the codec's year bound would reject.
        let (start, end) = self.start_end()?;
        let first = kind.for_date(start);
        let last = kind.for_date(end);
        Ok(PeriodRange::from_parts(kind, first.parts(), last.parts(), true).collect())
    }

    // ── Temporal status ──────────────────────────────────────────────────────

    /// Whether this period lies entirely before the current one of its kind.
    pub fn is_past(&self) -> bool {
        Period::current(self.kind) > *self
    }

    /// Whether this is the current period of its kind.
    pub fn is_current(&self) -> bool {
        Period::current(self.kind) == *self
    }

    /// Whether this period lies entirely after the current one of its kind.
    pub fn is_future(&self) -> bool {
        Period::current(self.kind) < *self
    }

    // ── Internals ────────────────────────────────────────────────────────────

    /// The `(year, sub_unit)` the code encodes; fixed at construction.
    fn parts(&self) -> (u16, u8) {
        (self.year, self.sub)
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind == other.kind {
            Some(self.code.cmp(&other.code))
        } else {
            None
        }
    }
}

// ── Conversions & formatting ──────────────────────────────────────────────────

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Period::from_code(s)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, sub) = self.parts();
        let text = match self.kind {
            PeriodKind::Weekly => kinds::weekly::display(year, sub),
            PeriodKind::Monthly => kinds::monthly::display(year, sub),
            PeriodKind::Quarterly => kinds::quarterly::display(year, sub),
            PeriodKind::Yearly => kinds::yearly::display(year),
        };
        f.write_str(&text)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({})", self.code)
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────────

/// Validate a raw code: registry lookup by prefix, then kind grammar.
pub fn validate(code: &str) -> Result<()> {
    let kind = registry::kind_for_code(code)?;
    codec::validate(kind, code)
}

/// The `kind_name` (e.g. `"weekly"`) period containing `date`, or today's
/// when `date` is `None`.
pub fn period_for_date(kind_name: &str, date: Option<Date>) -> Result<Period> {
    let kind = registry::kind_for_name(kind_name)?;
    Ok(kind.for_date(date.unwrap_or_else(Date::today)))
}

/// The inclusive span of a raw code.
pub fn period_start_end(code: &str) -> Result<(Date, Date)> {
    Period::from_code(code)?.start_end()
}

/// The human display string of a raw code.
pub fn period_display(code: &str) -> Result<String> {
    Ok(Period::from_code(code)?.to_string())
}
