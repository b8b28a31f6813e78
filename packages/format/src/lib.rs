//! # Folio Format
//!
//! Paragraph formatting over attributed text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ TextStorage: characters + attribute runs    │
//! │  (AttributedText in memory)                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ formatters: Div, List, Blockquote, Header   │
//! │  - apply/remove/present on one mapping      │
//! │  - range operations over whole paragraphs   │
//! │  - list continuation across paragraphs      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mirror: paragraphs → folio-dom tree         │
//! │ numbering: list markers per paragraph       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use folio_common::TextRange;
//! use folio_format::{mirror, AttributedText, ListFormatter, ParagraphFormatter};
//! use folio_style::ListStyle;
//!
//! let mut text = AttributedText::new("milk\neggs\nflour");
//! let formatter = ParagraphFormatter::from(ListFormatter::new(ListStyle::Unordered));
//! formatter.apply_to_range(&mut text, TextRange::new(0, 15), None);
//!
//! let tree = mirror::build_tree(&text);
//! assert_eq!(tree.children(tree.root()).len(), 1);
//! ```

mod attributed_text;
mod attributes;
pub mod formatter;
pub mod mirror;
pub mod numbering;
pub mod storage;

pub use attributed_text::{AttributeRun, AttributedText};
pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use formatter::{
    application_range, BlockquoteFormatter, DivFormatter, HeaderFormatter, ListFormatter,
    ParagraphFormatter,
};
pub use numbering::{paragraph_markers, ListMarker};
pub use storage::TextStorage;
