//! Node storage for [`DomTree`](crate::DomTree).
//!
//! Nodes live in a slot arena and refer to each other by [`NodeId`]. A child
//! list owns its entries; a parent handle is only a back-reference used for
//! ancestor queries and sibling lookup.

use folio_common::{Attribute, HtmlRepresentation, TextRange};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a node in a [`DomTree`](crate::DomTree).
    ///
    /// Handles stay valid while nodes move between parents, including nodes
    /// detached by an edit and later re-attached by undo.
    pub struct NodeId;
}

/// Name given to every text node.
pub const TEXT_NODE_NAME: &str = "text";

/// Describes an element to create, typically the target of a wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representation: Option<HtmlRepresentation>,
}

impl ElementDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            representation: None,
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_representation(mut self, representation: HtmlRepresentation) -> Self {
        self.representation = Some(representation);
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub children: Vec<NodeId>,
    pub attributes: Vec<Attribute>,
    pub representation: Option<HtmlRepresentation>,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Text { contents: String },
    Element(ElementData),
}

/// What goes in each arena slot
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub name: String,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl NodeData {
    pub fn text(contents: String) -> Self {
        Self {
            name: TEXT_NODE_NAME.to_string(),
            parent: None,
            kind: NodeKind::Text { contents },
        }
    }

    pub fn element(descriptor: ElementDescriptor) -> Self {
        Self {
            name: descriptor.name,
            parent: None,
            kind: NodeKind::Element(ElementData {
                children: Vec::new(),
                attributes: descriptor.attributes,
                representation: descriptor.representation,
            }),
        }
    }
}

/// Number of characters in a string.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `index`, or the string's byte length
/// when `index` equals the character count.
pub(crate) fn byte_index(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Byte range matching a character range, `None` when out of bounds.
pub(crate) fn byte_range(s: &str, range: TextRange) -> Option<std::ops::Range<usize>> {
    if range.end() > char_len(s) {
        return None;
    }
    Some(byte_index(s, range.location)..byte_index(s, range.end()))
}
