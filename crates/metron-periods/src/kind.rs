//! `PeriodKind` — the four period granularities.

use crate::date::Date;
use crate::kinds;
use crate::period::Period;

/// The granularity of a period: weekly, monthly, quarterly, or yearly.
///
/// Each kind owns its own small calendar-arithmetic routines (the rollover
/// rules are irregular enough that four independent implementations beat one
/// parameterized algorithm); dispatch from a code prefix or a kind name goes
/// through the [registry](crate::registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKind {
    /// ISO-8601 week, code `W-YYYY-WW`.
    Weekly,
    /// Calendar month, code `M-YYYY-MM`.
    Monthly,
    /// Calendar quarter, code `Q-YYYY-Q`.
    Quarterly,
    /// Calendar year, code `Y-YYYY`.
    Yearly,
}

impl PeriodKind {
    /// All kinds, finest first.
    pub const ALL: [PeriodKind; 4] = [
        PeriodKind::Weekly,
        PeriodKind::Monthly,
        PeriodKind::Quarterly,
        PeriodKind::Yearly,
    ];

    /// The single-letter uppercase prefix identifying this kind in a code.
    pub fn prefix(&self) -> char {
        match self {
            PeriodKind::Weekly => 'W',
            PeriodKind::Monthly => 'M',
            PeriodKind::Quarterly => 'Q',
            PeriodKind::Yearly => 'Y',
        }
    }

    /// The lowercase kind name (`"weekly"`, `"monthly"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            PeriodKind::Weekly => "weekly",
            PeriodKind::Monthly => "monthly",
            PeriodKind::Quarterly => "quarterly",
            PeriodKind::Yearly => "yearly",
        }
    }

    /// The kinds that may nest inside this one (not including itself).
    ///
    /// The hierarchy is fixed: a year contains quarters, months, and weeks;
    /// a quarter contains months and weeks; a month contains weeks; a week
    /// is a leaf.
    pub fn sub_kinds(&self) -> &'static [PeriodKind] {
        match self {
            PeriodKind::Weekly => &[],
            PeriodKind::Monthly => &[PeriodKind::Weekly],
            PeriodKind::Quarterly => &[PeriodKind::Monthly, PeriodKind::Weekly],
            PeriodKind::Yearly => &[
                PeriodKind::Quarterly,
                PeriodKind::Monthly,
                PeriodKind::Weekly,
            ],
        }
    }

    /// Return `true` if `other` is this kind or one of its allowed sub-kinds.
    pub fn can_contain(&self, other: PeriodKind) -> bool {
        *self == other || self.sub_kinds().contains(&other)
    }

    /// Return the period of this kind containing the given date.
    pub fn for_date(&self, date: Date) -> Period {
        let (year, sub) = match self {
            PeriodKind::Weekly => kinds::weekly::for_date(date),
            PeriodKind::Monthly => kinds::monthly::for_date(date),
            PeriodKind::Quarterly => kinds::quarterly::for_date(date),
            PeriodKind::Yearly => kinds::yearly::for_date(date),
        };
        Period::from_canonical_parts(*self, year, sub)
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
