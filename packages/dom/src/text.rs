//! Text node editing: character edits, splitting and range wrapping.

use crate::edit::{Edit, Side};
use crate::node::char_len;
use crate::{DomTree, ElementDescriptor, NodeId, UndoStack};
use folio_common::TextRange;
use tracing::debug;

impl DomTree {
    /// Text held by a text node
    pub fn contents(&self, node: NodeId) -> &str {
        self.text_contents(node)
    }

    pub fn append_text(&mut self, node: NodeId, string: &str, undo: Option<&mut UndoStack>) {
        let end = char_len(self.text_contents(node));
        self.replace_characters(node, TextRange::caret(end), string, undo);
    }

    pub fn prepend_text(&mut self, node: NodeId, string: &str, undo: Option<&mut UndoStack>) {
        self.replace_characters(node, TextRange::caret(0), string, undo);
    }

    /// Remove a character range from a text node.
    ///
    /// Panics when the range is out of bounds.
    pub fn delete_characters(&mut self, node: NodeId, range: TextRange, undo: Option<&mut UndoStack>) {
        self.replace_characters(node, range, "", undo);
    }

    /// Replace a character range of a text node.
    ///
    /// Panics when the range is out of bounds. Style inheritance is the
    /// caller's business.
    pub fn replace_characters(
        &mut self,
        node: NodeId,
        range: TextRange,
        string: &str,
        undo: Option<&mut UndoStack>,
    ) {
        self.apply_edit(
            &Edit::ReplaceCharacters {
                node,
                range,
                text: string.to_string(),
            },
            undo,
        );
    }

    /// Split a text node in two at `location`.
    ///
    /// Nothing happens when `location` is 0 or the node's length. Otherwise
    /// the text from `location` onwards moves into a new node inserted as
    /// the next sibling, which is returned.
    pub fn split_at(
        &mut self,
        node: NodeId,
        location: usize,
        undo: Option<&mut UndoStack>,
    ) -> Option<NodeId> {
        let length = char_len(self.text_contents(node));
        if location == 0 || location == length {
            // Nothing to split, move along...
            return None;
        }
        assert!(location < length, "Split location {location} is out of bounds!");

        Some(self.separate(node, location, Side::After, undo))
    }

    /// Split a text node so that it holds exactly `range`.
    ///
    /// The text after the range becomes a new next sibling and the text
    /// before it a new previous sibling; empty fragments create no node.
    /// The tail is extracted first so the head insertion index stays valid.
    /// An empty range isolates no text, so nothing is split.
    pub fn split_for_range(&mut self, node: NodeId, range: TextRange, undo: Option<&mut UndoStack>) {
        let length = char_len(self.text_contents(node));
        assert!(
            range.end() <= length,
            "This scenario should not be possible: range {range} exceeds a node of length {length}."
        );
        if range.is_empty() {
            return;
        }

        self.batched(undo, "Split text", |tree, mut undo| {
            if range.end() < length {
                tree.separate(node, range.end(), Side::After, undo.as_deref_mut());
            }
            if range.location > 0 {
                tree.separate(node, range.location, Side::Before, undo);
            }
        });
    }

    /// Wrap `range` of a text node in a new element, returning the element.
    ///
    /// A range covering the whole node wraps the node itself; otherwise the
    /// node is split around the range first so the wrap always applies to an
    /// exact-range node.
    ///
    /// Panics when `range` is empty but the node is not: the element would
    /// wrap an empty text node.
    pub fn wrap_range(
        &mut self,
        node: NodeId,
        range: TextRange,
        descriptor: ElementDescriptor,
        undo: Option<&mut UndoStack>,
    ) -> NodeId {
        let full = TextRange::new(0, char_len(self.text_contents(node)));
        if range == full {
            return self.wrap(node, descriptor, undo);
        }
        assert!(
            !range.is_empty(),
            "This scenario should not be possible: cannot wrap the empty range {range} of a non-empty text node."
        );

        self.batched(undo, "Wrap text", |tree, mut undo| {
            tree.split_for_range(node, range, undo.as_deref_mut());
            tree.wrap(node, descriptor, undo)
        })
    }

    /// Wrap every text fragment of `element` intersecting `range` in its own
    /// new element. Returns the new elements in document order; an empty
    /// range intersects no fragment and wraps nothing.
    pub fn wrap_text_range(
        &mut self,
        element: NodeId,
        range: TextRange,
        descriptor: &ElementDescriptor,
        undo: Option<&mut UndoStack>,
    ) -> Vec<NodeId> {
        let total = self.length(element);
        assert!(
            range.end() <= total,
            "The specified range {range} is out of bounds for a node of length {total}."
        );

        let mut targets = Vec::new();
        let mut start = 0;
        for leaf in self.text_leaves(element) {
            let leaf_range = TextRange::new(start, char_len(self.text_contents(leaf)));
            if let Some(overlap) = leaf_range.intersection(&range) {
                targets.push((leaf, overlap.shifted_back(start)));
            }
            start = leaf_range.end();
        }
        debug!(fragments = targets.len(), name = %descriptor.name, "wrapping text range");

        self.batched(undo, "Wrap range", |tree, mut undo| {
            targets
                .into_iter()
                .map(|(leaf, local)| {
                    tree.wrap_range(leaf, local, descriptor.clone(), undo.as_deref_mut())
                })
                .collect()
        })
    }

    fn separate(
        &mut self,
        keep: NodeId,
        at: usize,
        side: Side,
        undo: Option<&mut UndoStack>,
    ) -> NodeId {
        let absorb = self.create_text(String::new());
        self.apply_edit(
            &Edit::Separate {
                keep,
                absorb,
                at,
                side,
            },
            undo,
        );
        absorb
    }
}
