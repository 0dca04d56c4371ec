//! # metron-periods
//!
//! Discrete calendar periods — weekly, monthly, quarterly, yearly — used to
//! tag time-series metrics, with canonical string codes, calendar spans,
//! range enumeration, containment, and free-text parsing.
//!
//! A period is identified by a canonical code such as `W-2015-03`,
//! `M-2015-01`, `Q-2015-1`, or `Y-2015`:
//!
//! ```
//! use metron_periods::{parse, period_range, Date, Period, PeriodKind};
//!
//! let week = Period::from_code("W-2013-32")?;
//! assert_eq!(week.to_string(), "Week of Aug 05, 2013");
//!
//! let date = Date::from_ymd(2013, 8, 7)?;
//! assert_eq!(PeriodKind::Quarterly.for_date(date).code(), "Q-2013-3");
//!
//! let months: Vec<_> = period_range("M-2012-11", "M-2013-02", false)?
//!     .map(|p| p.code().to_string())
//!     .collect();
//! assert_eq!(months, ["M-2012-11", "M-2012-12", "M-2013-01"]);
//!
//! assert_eq!(parse("Jan 2015")?.unwrap().code(), "M-2015-01");
//! # Ok::<(), metron_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Canonical code grammar: validation, decoding, encoding.
pub mod codec;

/// `Date` and ISO-week arithmetic.
pub mod date;

/// `PeriodKind` and the containment lattice.
pub mod kind;

/// Per-kind calendar arithmetic.
pub mod kinds;

/// Free-text parsing.
pub mod parser;

/// `Period` value type.
pub mod period;

/// Range enumeration.
pub mod range;

/// Prefix/name dispatch tables.
pub mod registry;

#[cfg(feature = "serde")]
mod serde_impl;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use kind::PeriodKind;
pub use parser::parse;
pub use period::{period_display, period_for_date, period_start_end, validate, Period};
pub use range::{period_range, PeriodRange};
