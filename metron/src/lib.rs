//! # metron
//!
//! Calendar period types for tagging time-series metrics.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `metron-*` crates.
//!
//! ```rust
//! use metron::{parse, Period, PeriodKind};
//!
//! let quarter = Period::from_code("Q-2013-3")?;
//! assert_eq!(quarter.to_string(), "2013Q3");
//! assert!(quarter.validate_can_contain(PeriodKind::Monthly).is_ok());
//! assert_eq!(parse("2015-W3")?.unwrap().code(), "W-2015-03");
//! # Ok::<(), metron::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and process-wide settings.
pub use metron_core as core;

/// Period codes, arithmetic, ranges, containment, and parsing.
pub use metron_periods as periods;

pub use metron_core::{Error, Result, Settings};
pub use metron_periods::{
    parse, period_display, period_for_date, period_range, period_start_end, validate, Date,
    Period, PeriodKind, PeriodRange,
};
