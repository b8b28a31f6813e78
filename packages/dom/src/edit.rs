//! # Tree Edits
//!
//! Every structural or textual change to a [`DomTree`] is expressed as an
//! [`Edit`]. Applying an edit returns its exact inverse, which is what the
//! [`UndoStack`](crate::UndoStack) records.
//!
//! ## Edit Semantics
//!
//! ### ReplaceCharacters
//! - Replaces a character range of one text node
//! - Out-of-bounds ranges are contract violations (panic)
//!
//! ### InsertChild / RemoveChild
//! - Insert requires a detached child and an index in `[0, child_count]`
//! - Removal detaches the child but keeps it in the arena
//!
//! ### Join / Separate
//! - Join moves the text of an adjacent sibling into `keep` and detaches it
//! - Separate is the reverse: it moves text out of `keep` into a detached
//!   node and inserts that node next to `keep`
//!
//! ### Wrap / Unwrap
//! - Wrap moves contiguous siblings into a detached, empty element placed
//!   where the first sibling was
//! - Unwrap replaces an element with its children

use crate::node::{byte_index, byte_range, char_len};
use crate::{DomTree, NodeId};
use folio_common::TextRange;

/// Side of `keep` that a separated fragment lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// A single reversible tree edit
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Replace `range` of a text node with `text`
    ReplaceCharacters {
        node: NodeId,
        range: TextRange,
        text: String,
    },

    /// Insert a detached node into `parent` at `index`
    InsertChild {
        parent: NodeId,
        child: NodeId,
        index: usize,
    },

    /// Detach `child` from `parent`
    RemoveChild { parent: NodeId, child: NodeId },

    /// Merge the adjacent text sibling `absorb` into `keep`
    Join { keep: NodeId, absorb: NodeId },

    /// Move the text of `keep` on `side` of character `at` into the detached
    /// text node `absorb`, then insert `absorb` on that side of `keep`
    Separate {
        keep: NodeId,
        absorb: NodeId,
        at: usize,
        side: Side,
    },

    /// Move contiguous sibling `nodes` into the detached, empty `element`
    Wrap { element: NodeId, nodes: Vec<NodeId> },

    /// Replace `element` with its children
    Unwrap { element: NodeId },
}

impl Edit {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Edit::ReplaceCharacters { .. } => "replace-characters",
            Edit::InsertChild { .. } => "insert-child",
            Edit::RemoveChild { .. } => "remove-child",
            Edit::Join { .. } => "join",
            Edit::Separate { .. } => "separate",
            Edit::Wrap { .. } => "wrap",
            Edit::Unwrap { .. } => "unwrap",
        }
    }

    /// Apply to `tree` and return the inverse edit.
    ///
    /// Panics when the edit violates a structural contract.
    pub(crate) fn apply(&self, tree: &mut DomTree) -> Edit {
        match self {
            Edit::ReplaceCharacters { node, range, text } => {
                Self::apply_replace_characters(tree, *node, *range, text)
            }
            Edit::InsertChild {
                parent,
                child,
                index,
            } => Self::apply_insert(tree, *parent, *child, *index),
            Edit::RemoveChild { parent, child } => Self::apply_remove(tree, *parent, *child),
            Edit::Join { keep, absorb } => Self::apply_join(tree, *keep, *absorb),
            Edit::Separate {
                keep,
                absorb,
                at,
                side,
            } => Self::apply_separate(tree, *keep, *absorb, *at, *side),
            Edit::Wrap { element, nodes } => Self::apply_wrap(tree, *element, nodes),
            Edit::Unwrap { element } => Self::apply_unwrap(tree, *element),
        }
    }

    fn apply_replace_characters(
        tree: &mut DomTree,
        node: NodeId,
        range: TextRange,
        text: &str,
    ) -> Edit {
        let contents = tree.text_contents_mut(node);
        let bytes = byte_range(contents, range).unwrap_or_else(|| {
            panic!(
                "The specified range {range} is out of bounds for a text node of length {}.",
                char_len(contents)
            )
        });

        let removed = contents[bytes.clone()].to_string();
        contents.replace_range(bytes, text);

        Edit::ReplaceCharacters {
            node,
            range: TextRange::new(range.location, char_len(text)),
            text: removed,
        }
    }

    fn apply_insert(tree: &mut DomTree, parent: NodeId, child: NodeId, index: usize) -> Edit {
        assert!(
            tree.parent(child).is_none(),
            "Cannot insert a node that still has a parent."
        );
        assert!(
            child != parent && !tree.is_ancestor_of(child, parent),
            "Inserting the node would create a cycle."
        );

        let children = tree.children_mut(parent);
        assert!(
            index <= children.len(),
            "Insertion index {index} is out of bounds [0, {}].",
            children.len()
        );
        children.insert(index, child);
        tree.node_mut(child).parent = Some(parent);

        Edit::RemoveChild { parent, child }
    }

    fn apply_remove(tree: &mut DomTree, parent: NodeId, child: NodeId) -> Edit {
        let index = tree
            .children(parent)
            .iter()
            .position(|&candidate| candidate == child)
            .unwrap_or_else(|| panic!("The node is not a child of the given parent."));

        tree.children_mut(parent).remove(index);
        tree.node_mut(child).parent = None;

        Edit::InsertChild {
            parent,
            child,
            index,
        }
    }

    fn apply_join(tree: &mut DomTree, keep: NodeId, absorb: NodeId) -> Edit {
        let (parent, keep_index) = tree.expect_position(keep);
        let (absorb_parent, absorb_index) = tree.expect_position(absorb);
        assert!(
            parent == absorb_parent && keep_index.abs_diff(absorb_index) == 1,
            "Joined text nodes must be adjacent siblings."
        );
        assert!(
            tree.is_text(keep) && tree.is_text(absorb),
            "Only text nodes can be joined."
        );

        let absorbed = std::mem::take(tree.text_contents_mut(absorb));
        tree.children_mut(parent).remove(absorb_index);
        tree.node_mut(absorb).parent = None;

        let contents = tree.text_contents_mut(keep);
        if absorb_index > keep_index {
            let at = char_len(contents);
            contents.push_str(&absorbed);
            Edit::Separate {
                keep,
                absorb,
                at,
                side: Side::After,
            }
        } else {
            contents.insert_str(0, &absorbed);
            Edit::Separate {
                keep,
                absorb,
                at: char_len(&absorbed),
                side: Side::Before,
            }
        }
    }

    fn apply_separate(tree: &mut DomTree, keep: NodeId, absorb: NodeId, at: usize, side: Side) -> Edit {
        assert!(
            tree.parent(absorb).is_none() && tree.is_text(absorb),
            "A separated fragment needs a detached text node."
        );
        let (parent, keep_index) = tree.expect_position(keep);

        let contents = tree.text_contents_mut(keep);
        assert!(
            at <= char_len(contents),
            "Split location {at} is out of bounds."
        );
        let split = byte_index(contents, at);
        let moved = match side {
            Side::After => contents.split_off(split),
            Side::Before => {
                let tail = contents.split_off(split);
                std::mem::replace(contents, tail)
            }
        };
        *tree.text_contents_mut(absorb) = moved;

        let index = match side {
            Side::After => keep_index + 1,
            Side::Before => keep_index,
        };
        tree.children_mut(parent).insert(index, absorb);
        tree.node_mut(absorb).parent = Some(parent);

        Edit::Join { keep, absorb }
    }

    fn apply_wrap(tree: &mut DomTree, element: NodeId, nodes: &[NodeId]) -> Edit {
        let first = *nodes
            .first()
            .unwrap_or_else(|| panic!("Cannot wrap an empty node sequence."));
        assert!(
            tree.parent(element).is_none() && tree.is_element(element) && tree.children(element).is_empty(),
            "Wrapping requires a detached, empty element."
        );

        let (parent, first_index) = tree.expect_position(first);
        for (offset, &node) in nodes.iter().enumerate() {
            assert!(
                tree.position(node) == Some((parent, first_index + offset)),
                "Wrapped nodes must be contiguous siblings."
            );
        }

        tree.children_mut(parent)
            .splice(first_index..first_index + nodes.len(), [element]);
        tree.node_mut(element).parent = Some(parent);
        for &node in nodes {
            tree.node_mut(node).parent = Some(element);
        }
        tree.children_mut(element).extend_from_slice(nodes);

        Edit::Unwrap { element }
    }

    fn apply_unwrap(tree: &mut DomTree, element: NodeId) -> Edit {
        let (parent, index) = tree.expect_position(element);
        let children = std::mem::take(tree.children_mut(element));

        tree.children_mut(parent)
            .splice(index..index + 1, children.iter().copied());
        for &child in &children {
            tree.node_mut(child).parent = Some(parent);
        }
        tree.node_mut(element).parent = None;

        if children.is_empty() {
            // An empty element simply disappears; restore it by re-insertion.
            Edit::InsertChild {
                parent,
                child: element,
                index,
            }
        } else {
            Edit::Wrap {
                element,
                nodes: children,
            }
        }
    }
}
