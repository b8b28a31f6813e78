//! # Paragraph Properties
//!
//! Structural markers attached to a paragraph, outermost first. Every
//! property may carry the markup it came from; equality only looks at the
//! kind-specific fields.

use crate::{ListStyle, StyleError, StyleResult, TextList};
use folio_common::HtmlRepresentation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant used by kind queries on a [`ParagraphStyle`](crate::ParagraphStyle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Div,
    Paragraph,
    ListItem,
    List,
    Blockquote,
    Header,
    Preformatted,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Div => "div",
            PropertyKind::Paragraph => "paragraph",
            PropertyKind::ListItem => "list-item",
            PropertyKind::List => "list",
            PropertyKind::Blockquote => "blockquote",
            PropertyKind::Header => "header",
            PropertyKind::Preformatted => "preformatted",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParagraphProperty {
    Div {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
    List(TextList),
    Blockquote {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
    Header {
        #[serde(default = "default_header_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
    Preformatted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        representation: Option<HtmlRepresentation>,
    },
}

fn default_header_level() -> u8 {
    1
}

impl ParagraphProperty {
    pub fn div(representation: Option<HtmlRepresentation>) -> Self {
        ParagraphProperty::Div { representation }
    }

    pub fn paragraph(representation: Option<HtmlRepresentation>) -> Self {
        ParagraphProperty::Paragraph { representation }
    }

    pub fn list_item(representation: Option<HtmlRepresentation>) -> Self {
        ParagraphProperty::ListItem { representation }
    }

    pub fn list(list: TextList) -> Self {
        ParagraphProperty::List(list)
    }

    pub fn blockquote(representation: Option<HtmlRepresentation>) -> Self {
        ParagraphProperty::Blockquote { representation }
    }

    /// Header property; levels outside `1..=6` are rejected.
    pub fn header(level: u8, representation: Option<HtmlRepresentation>) -> StyleResult<Self> {
        if !(1..=6).contains(&level) {
            return Err(StyleError::InvalidHeaderLevel(level));
        }
        Ok(ParagraphProperty::Header {
            level,
            representation,
        })
    }

    pub fn preformatted(representation: Option<HtmlRepresentation>) -> Self {
        ParagraphProperty::Preformatted { representation }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            ParagraphProperty::Div { .. } => PropertyKind::Div,
            ParagraphProperty::Paragraph { .. } => PropertyKind::Paragraph,
            ParagraphProperty::ListItem { .. } => PropertyKind::ListItem,
            ParagraphProperty::List(_) => PropertyKind::List,
            ParagraphProperty::Blockquote { .. } => PropertyKind::Blockquote,
            ParagraphProperty::Header { .. } => PropertyKind::Header,
            ParagraphProperty::Preformatted { .. } => PropertyKind::Preformatted,
        }
    }

    pub fn representation(&self) -> Option<&HtmlRepresentation> {
        match self {
            ParagraphProperty::List(list) => list.representation(),
            ParagraphProperty::Div { representation }
            | ParagraphProperty::Paragraph { representation }
            | ParagraphProperty::ListItem { representation }
            | ParagraphProperty::Blockquote { representation }
            | ParagraphProperty::Header { representation, .. }
            | ParagraphProperty::Preformatted { representation } => representation.as_ref(),
        }
    }

    pub fn as_list(&self) -> Option<&TextList> {
        match self {
            ParagraphProperty::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn header_level(&self) -> Option<u8> {
        match self {
            ParagraphProperty::Header { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// HTML element this property opens when the paragraph is written out
    pub fn html_tag(&self) -> &'static str {
        match self {
            ParagraphProperty::Div { .. } => "div",
            ParagraphProperty::Paragraph { .. } => "p",
            ParagraphProperty::ListItem { .. } => "li",
            ParagraphProperty::List(list) => list.style().html_tag(),
            ParagraphProperty::Blockquote { .. } => "blockquote",
            ParagraphProperty::Header { level, .. } => match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            ParagraphProperty::Preformatted { .. } => "pre",
        }
    }

    pub fn is_list_of(&self, style: ListStyle) -> bool {
        self.as_list().is_some_and(|list| list.style() == style)
    }
}

impl PartialEq for ParagraphProperty {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParagraphProperty::List(a), ParagraphProperty::List(b)) => a == b,
            (ParagraphProperty::Header { level: a, .. }, ParagraphProperty::Header { level: b, .. }) => {
                a == b
            }
            _ => self.kind() == other.kind(),
        }
    }
}

impl From<TextList> for ParagraphProperty {
    fn from(list: TextList) -> Self {
        ParagraphProperty::List(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::ElementRepresentation;

    #[test]
    fn test_equality_by_kind_fields() {
        let bare = ParagraphProperty::div(None);
        let marked = ParagraphProperty::div(Some(ElementRepresentation::new("div").into()));
        assert_eq!(bare, marked);
        assert_ne!(bare, ParagraphProperty::blockquote(None));

        let h1 = ParagraphProperty::header(1, None).unwrap();
        let h2 = ParagraphProperty::header(2, None).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_header_level_bounds() {
        assert!(matches!(
            ParagraphProperty::header(7, None),
            Err(StyleError::InvalidHeaderLevel(7))
        ));
        assert!(ParagraphProperty::header(0, None).is_err());
        assert_eq!(ParagraphProperty::header(6, None).unwrap().html_tag(), "h6");
    }

    #[test]
    fn test_list_property_helpers() {
        let property: ParagraphProperty = TextList::new(ListStyle::Unordered).into();
        assert_eq!(property.kind(), PropertyKind::List);
        assert_eq!(property.html_tag(), "ul");
        assert!(property.is_list_of(ListStyle::Unordered));
        assert!(!property.is_list_of(ListStyle::Ordered));
    }
}
