//! Serde support (feature `serde`).
//!
//! A [`Period`] serializes as its canonical code string — the only
//! representation external storage ever sees — and deserializes through full
//! validation, so malformed stored codes fail on read rather than producing
//! an invalid value. Absent values are modelled by `Option<Period>` as
//! usual.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::period::Period;

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Period::from_code(&code).map_err(de::Error::custom)
    }
}
