//! # List Markers
//!
//! Marker text for list items. The scheme cycles with nesting depth:
//!
//! | depth % 3 | ordered        | unordered |
//! |-----------|----------------|-----------|
//! | 1         | `1.` `2.` ...  | `•`       |
//! | 2         | `a.` `b.` ...  | `◦`       |
//! | 0         | `i.` `ii.` ... | `▪`       |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListStyle {
    Unordered,
    /// Also the decoded value for any unknown style name
    #[default]
    #[serde(other)]
    Ordered,
}

impl ListStyle {
    /// Marker shown before item `number` of a list nested `depth` levels deep
    pub fn marker_text(&self, number: usize, depth: usize) -> String {
        match self {
            ListStyle::Ordered => match depth % 3 {
                1 => format!("{number}."),
                2 => format!("{}.", alphabetic_index(number)),
                _ => format!("{}.", roman_index(number)),
            },
            ListStyle::Unordered => match depth % 3 {
                1 => "\u{2022}".to_string(),
                2 => "\u{25E6}".to_string(),
                _ => "\u{25AA}".to_string(),
            },
        }
    }

    pub fn html_tag(&self) -> &'static str {
        match self {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStyle::Ordered => write!(f, "ordered"),
            ListStyle::Unordered => write!(f, "unordered"),
        }
    }
}

impl std::str::FromStr for ListStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordered" | "ol" => Ok(ListStyle::Ordered),
            "unordered" | "ul" => Ok(ListStyle::Unordered),
            other => Err(format!("unknown list style `{other}`")),
        }
    }
}

/// Bijective base-26 lowercase letters: 1 → `a`, 26 → `z`, 27 → `aa`.
///
/// Zero has no letters and maps to the empty string.
pub fn alphabetic_index(number: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = number;
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(b'a' + (remaining % 26) as u8));
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

const ROMAN_DIGITS: [(usize, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Lowercase roman numeral, applied greedily from 1000 down. Zero maps to
/// the empty string.
pub fn roman_index(number: usize) -> String {
    let mut remaining = number;
    let mut result = String::new();
    for (value, digits) in ROMAN_DIGITS {
        while remaining >= value {
            remaining -= value;
            result.push_str(digits);
        }
    }
    result
}
