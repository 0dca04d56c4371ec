//! Kind registry — the single dispatch point from prefixes and names.
//!
//! Two lookup tables, built once at first use and read-only afterwards:
//! prefix letter → kind and lowercase kind name → kind. Every place that
//! turns a raw code or a kind name into a [`PeriodKind`] goes through here;
//! nothing else hard-codes a prefix switch.

use std::collections::HashMap;
use std::sync::OnceLock;

use metron_core::errors::{Error, Result};

use crate::kind::PeriodKind;

struct Registry {
    by_prefix: HashMap<char, PeriodKind>,
    by_name: HashMap<&'static str, PeriodKind>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut by_prefix = HashMap::new();
        let mut by_name = HashMap::new();
        for kind in PeriodKind::ALL {
            by_prefix.insert(kind.prefix(), kind);
            by_name.insert(kind.name(), kind);
        }
        Registry { by_prefix, by_name }
    })
}

/// Look up a kind by its single-letter prefix (`'W'`, `'M'`, `'Q'`, `'Y'`).
pub fn kind_for_prefix(prefix: char) -> Result<PeriodKind> {
    registry()
        .by_prefix
        .get(&prefix)
        .copied()
        .ok_or_else(|| Error::UnknownKind(format!("prefix '{prefix}'")))
}

/// Look up a kind by its lowercase name (`"weekly"`, `"monthly"`, …).
pub fn kind_for_name(name: &str) -> Result<PeriodKind> {
    registry()
        .by_name
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownKind(name.to_string()))
}

/// Look up the kind of a raw code by its first character.
pub fn kind_for_code(code: &str) -> Result<PeriodKind> {
    let prefix = code
        .chars()
        .next()
        .ok_or_else(|| Error::UnknownKind("empty code".into()))?;
    kind_for_prefix(prefix).map_err(|_| Error::UnknownKind(format!("invalid prefix in {code}")))
}
