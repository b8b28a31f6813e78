//! JSON coding for styles and properties.
//!
//! Decoding is lenient: missing fields fall back to defaults (ordered list,
//! no start, not reversed, zero spacing) and an unknown list style decodes
//! as ordered.

use crate::{ParagraphProperty, ParagraphStyle, StyleError, StyleResult};
use serde::{Deserialize, Deserializer};

impl ParagraphStyle {
    pub fn to_json(&self) -> StyleResult<String> {
        serde_json::to_string(self).map_err(StyleError::Encode)
    }

    pub fn from_json(source: &str) -> StyleResult<Self> {
        serde_json::from_str(source).map_err(StyleError::Decode)
    }
}

impl ParagraphProperty {
    pub fn to_json(&self) -> StyleResult<String> {
        serde_json::to_string(self).map_err(StyleError::Encode)
    }

    pub fn from_json(source: &str) -> StyleResult<Self> {
        serde_json::from_str(source).map_err(StyleError::Decode)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStart {
    Number(i64),
    Text(String),
}

/// List start as a positive integer; anything else reads as "no start".
pub(crate) fn positive_start<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let start = match Option::<RawStart>::deserialize(deserializer)? {
        Some(RawStart::Number(number)) => usize::try_from(number).ok(),
        Some(RawStart::Text(text)) => text.trim().parse().ok(),
        None => None,
    };
    Ok(start.filter(|&start| start > 0))
}
