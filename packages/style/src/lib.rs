//! # Folio Style
//!
//! Paragraph-level style values: the ordered property sequence attached to a
//! paragraph ([`ParagraphStyle`]), list identities ([`TextList`]) and the
//! list marker engine.
//!
//! Styles are plain values. Every formatter builds a new [`ParagraphStyle`]
//! from a copy of the old one; nothing here is ever shared mutably.

pub mod coding;
pub mod error;
pub mod list;
pub mod marker;
pub mod paragraph_style;
pub mod property;

pub use error::{StyleError, StyleResult};
pub use list::TextList;
pub use marker::{alphabetic_index, roman_index, ListStyle};
pub use paragraph_style::ParagraphStyle;
pub use property::{ParagraphProperty, PropertyKind};
