//! Per-kind calendar arithmetic.
//!
//! Each kind has irregular rollover and span rules, so each gets its own
//! small module exposing the same three routines: `for_date` (date → period
//! parts), `start_end` (decoded code → inclusive span), and `display`.

/// ISO-8601 weeks.
pub mod weekly;

/// Calendar months.
pub mod monthly;

/// Calendar quarters.
pub mod quarterly;

/// Calendar years.
pub mod yearly;
