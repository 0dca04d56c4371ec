//! # metron-core
//!
//! Error definitions and process-wide settings shared by the metron crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub mod errors;

/// Process-wide settings (ambient clock).
pub mod settings;

pub use errors::{Error, Result};
pub use settings::Settings;
