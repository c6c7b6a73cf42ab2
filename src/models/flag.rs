//! Serde adapter for the `"True"` / `"False"` string flags used in HR data files.
//!
//! Flags are mapped to `bool` on the way in and written back as the same
//! literals on the way out. Any other spelling is rejected.

use serde::{Deserialize, Deserializer, Serializer};

const TRUE_LITERAL: &str = "True";
const FALSE_LITERAL: &str = "False";

/// Parses a flag literal.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value {
        TRUE_LITERAL => Some(true),
        FALSE_LITERAL => Some(false),
        _ => None,
    }
}

pub(crate) fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { TRUE_LITERAL } else { FALSE_LITERAL })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid flag literal '{raw}', expected \"{TRUE_LITERAL}\" or \"{FALSE_LITERAL}\""
        ))
    })
}
