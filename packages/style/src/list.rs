use crate::coding::positive_start;
use crate::ListStyle;
use folio_common::HtmlRepresentation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity of a list: style, numbering start and direction.
///
/// Two lists are the same list when style, start and direction match; the
/// markup representation is carried along but does not take part in
/// equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextList {
    #[serde(default)]
    style: ListStyle,

    #[serde(
        default,
        deserialize_with = "positive_start",
        skip_serializing_if = "Option::is_none"
    )]
    start: Option<usize>,

    #[serde(default)]
    reversed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    representation: Option<HtmlRepresentation>,
}

impl TextList {
    pub fn new(style: ListStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// List with explicit numbering. A start of zero counts as no start.
    pub fn with_numbering(style: ListStyle, start: Option<usize>, reversed: bool) -> Self {
        Self {
            style,
            start: start.filter(|&start| start > 0),
            reversed,
            representation: None,
        }
    }

    /// Build a list from its markup. `start` and `reversed` are read from an
    /// element representation; any other representation is only stored.
    pub fn from_representation(style: ListStyle, representation: Option<HtmlRepresentation>) -> Self {
        let element = representation.as_ref().and_then(HtmlRepresentation::as_element);
        let (start, reversed) = match element {
            Some(element) => {
                let start = element.parse_attribute::<usize>("start").unwrap_or_else(|error| {
                    debug!(%error, "ignoring list start");
                    None
                });
                (start.filter(|&start| start > 0), element.attribute("reversed").is_some())
            }
            None => (None, false),
        };

        Self {
            style,
            start,
            reversed,
            representation,
        }
    }

    pub fn style(&self) -> ListStyle {
        self.style
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn representation(&self) -> Option<&HtmlRepresentation> {
        self.representation.as_ref()
    }

    /// Number shown for the `index`-th item (0-based) of a list holding
    /// `item_count` items.
    pub fn item_number(&self, index: usize, item_count: usize) -> usize {
        if self.reversed {
            self.start.unwrap_or(item_count).saturating_sub(index)
        } else {
            self.start.unwrap_or(1) + index
        }
    }

    /// Marker text for an item of this list nested `depth` lists deep
    pub fn marker_text(&self, number: usize, depth: usize) -> String {
        self.style.marker_text(number, depth)
    }
}

impl PartialEq for TextList {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.start == other.start && self.reversed == other.reversed
    }
}

impl Eq for TextList {}
