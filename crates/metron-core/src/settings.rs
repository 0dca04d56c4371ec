//! Process-wide settings.
//!
//! [`Settings`] holds the **evaluation date** — the date "today" resolves to
//! when deciding whether a period is past, current, or future. It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread. Each test that changes the evaluation date
//! should restore it when done.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the metron crates.
///
/// Currently the only setting is the evaluation-date override. When unset,
/// `today` falls back to the system clock.
pub struct Settings {
    /// Override for "today" (days since the metron epoch), if any.
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation-date override as a serial number (days since
    /// the metron epoch: serial 1 = January 1, 1900).
    ///
    /// Returns `None` if no override is set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}
