//! # DOM Tree
//!
//! Arena-backed node tree. [`DomTree`] owns every node; elements own their
//! ordered child lists and every child keeps a non-owning parent handle.
//!
//! All mutation is funnelled through [`DomTree::apply_edit`] so that undo
//! recording and observer notification happen in one place. Structural
//! contract violations (bad indices, out-of-bounds ranges, missing parents)
//! panic: they signal a caller bug, never a data condition.

use crate::edit::Edit;
use crate::node::{char_len, ElementData, NodeData, NodeKind};
use crate::observer::EditObserver;
use crate::{ElementDescriptor, NodeId, UndoStack};
use folio_common::{Attribute, HtmlRepresentation};
use slotmap::SlotMap;
use tracing::trace;

/// Mutable node tree with a single root element
#[derive(Debug)]
pub struct DomTree {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
    observers: Vec<Box<dyn EditObserver>>,
}

impl DomTree {
    /// Create a tree holding a single, empty root element
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::element(ElementDescriptor::new(root_name)));
        Self {
            nodes,
            root,
            observers: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.insert(NodeData::text(text.into()))
    }

    /// Create a detached, empty element
    pub fn create_element(&mut self, descriptor: ElementDescriptor) -> NodeId {
        self.nodes.insert(NodeData::element(descriptor))
    }

    /// Register an observer notified after every applied edit
    pub fn add_observer(&mut self, observer: Box<dyn EditObserver>) {
        self.observers.push(observer);
    }

    /// Apply an edit, notify observers and record the inverse for undo.
    ///
    /// Returns the inverse edit.
    pub fn apply_edit(&mut self, edit: &Edit, undo: Option<&mut UndoStack>) -> Edit {
        let inverse = edit.apply(self);
        trace!(edit = edit.name(), "applied tree edit");

        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.did_apply(edit, self);
        }
        // Observers registered while notifying are kept after the existing ones.
        observers.append(&mut self.observers);
        self.observers = observers;

        if let Some(stack) = undo {
            stack.record(edit.clone(), inverse.clone());
        }
        inverse
    }

    /// Run `f` as a single undo step.
    pub(crate) fn batched<R>(
        &mut self,
        mut undo: Option<&mut UndoStack>,
        description: &str,
        f: impl FnOnce(&mut Self, Option<&mut UndoStack>) -> R,
    ) -> R {
        if let Some(stack) = undo.as_deref_mut() {
            stack.begin_batch();
            stack.set_batch_description(description);
        }
        let result = f(self, undo.as_deref_mut());
        if let Some(stack) = undo {
            stack.end_batch();
        }
        result
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Text { .. })
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Element(_))
    }

    /// Children of an element; text nodes have none.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Element(element) => &element.children,
            NodeKind::Text { .. } => &[],
        }
    }

    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match &self.node(id).kind {
            NodeKind::Element(element) => &element.attributes,
            NodeKind::Text { .. } => &[],
        }
    }

    pub fn attribute_value(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
            .and_then(|attribute| attribute.value.as_deref())
    }

    pub fn representation(&self, id: NodeId) -> Option<&HtmlRepresentation> {
        match &self.node(id).kind {
            NodeKind::Element(element) => element.representation.as_ref(),
            NodeKind::Text { .. } => None,
        }
    }

    /// Parent and sibling index of an attached node
    pub fn position(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let index = self
            .children(parent)
            .iter()
            .position(|&child| child == id)
            .unwrap_or_else(|| panic!("Node is missing from its parent's children."));
        Some((parent, index))
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        self.position(id).map(|(_, index)| index)
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            ancestors.push(ancestor);
            current = self.parent(ancestor);
        }
        ancestors
    }

    /// Check if `potential_ancestor` is an ancestor of `id`.
    pub fn is_ancestor_of(&self, potential_ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if ancestor == potential_ancestor {
                return true;
            }
            current = self.parent(ancestor);
        }
        false
    }

    /// Number of characters spanned by a node
    pub fn length(&self, id: NodeId) -> usize {
        match &self.node(id).kind {
            NodeKind::Text { contents } => char_len(contents),
            NodeKind::Element(element) => element
                .children
                .iter()
                .map(|&child| self.length(child))
                .sum(),
        }
    }

    /// Concatenated text of all leaves under a node
    pub fn text(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).kind {
            NodeKind::Text { contents } => out.push_str(contents),
            NodeKind::Element(element) => {
                for &child in &element.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Text leaves under a node, in document order
    pub fn text_leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        self.collect_leaves(id, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match &self.node(id).kind {
            NodeKind::Text { .. } => out.push(id),
            NodeKind::Element(element) => {
                for &child in &element.children {
                    self.collect_leaves(child, out);
                }
            }
        }
    }

    /// Text leaf holding character `location` of `id`, with the offset inside
    /// that leaf. A location equal to the length resolves to the end of the
    /// last leaf.
    pub fn leaf_at(&self, id: NodeId, location: usize) -> Option<(NodeId, usize)> {
        let leaves = self.text_leaves(id);
        let mut start = 0;
        for (index, &leaf) in leaves.iter().enumerate() {
            let length = self.length(leaf);
            let is_last = index + 1 == leaves.len();
            if location < start + length || (is_last && location == start + length) {
                return Some((leaf, location - start));
            }
            start += length;
        }
        None
    }

    /// Character offset of `id` from the start of `ancestor`.
    ///
    /// Panics when `ancestor` is not an ancestor of `id` (or `id` itself).
    pub fn offset_in(&self, ancestor: NodeId, id: NodeId) -> usize {
        let mut offset = 0;
        let mut current = id;
        while current != ancestor {
            let (parent, index) = self
                .position(current)
                .unwrap_or_else(|| panic!("Node is not a descendant of the given ancestor."));
            offset += self.children(parent)[..index]
                .iter()
                .map(|&sibling| self.length(sibling))
                .sum::<usize>();
            current = parent;
        }
        offset
    }

    // ------------------------------------------------------------------
    // Element edits
    // ------------------------------------------------------------------

    /// Insert `child` into `parent` at `index`, detaching it from any
    /// previous parent first.
    pub fn insert(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
        undo: Option<&mut UndoStack>,
    ) {
        assert!(
            self.is_element(parent),
            "Children can only be inserted into elements."
        );
        self.batched(undo, "Insert node", |tree, mut undo| {
            let mut index = index;
            if let Some((old_parent, old_index)) = tree.position(child) {
                tree.apply_edit(
                    &Edit::RemoveChild {
                        parent: old_parent,
                        child,
                    },
                    undo.as_deref_mut(),
                );
                if old_parent == parent && old_index < index {
                    index -= 1;
                }
            }
            tree.apply_edit(
                &Edit::InsertChild {
                    parent,
                    child,
                    index,
                },
                undo,
            );
        });
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId, undo: Option<&mut UndoStack>) {
        let index = self.children(parent).len();
        self.insert(parent, child, index, undo);
    }

    /// Detach a node from its parent. The node stays valid and can be
    /// re-inserted.
    pub fn remove(&mut self, child: NodeId, undo: Option<&mut UndoStack>) {
        let parent = self
            .parent(child)
            .unwrap_or_else(|| panic!("Cannot remove a node without a parent."));
        self.apply_edit(&Edit::RemoveChild { parent, child }, undo);
    }

    /// Put `new` where `old` is, detaching `old`
    pub fn replace(&mut self, old: NodeId, new: NodeId, undo: Option<&mut UndoStack>) {
        let (parent, index) = self.expect_position(old);
        self.batched(undo, "Replace node", |tree, mut undo| {
            tree.apply_edit(&Edit::RemoveChild { parent, child: old }, undo.as_deref_mut());
            tree.insert(parent, new, index, undo);
        });
    }

    /// Wrap a whole node in a new element, returning the element
    pub fn wrap(
        &mut self,
        node: NodeId,
        descriptor: ElementDescriptor,
        undo: Option<&mut UndoStack>,
    ) -> NodeId {
        let element = self.create_element(descriptor);
        self.apply_edit(
            &Edit::Wrap {
                element,
                nodes: vec![node],
            },
            undo,
        );
        element
    }

    /// Replace an element with its children
    pub fn unwrap(&mut self, element: NodeId, undo: Option<&mut UndoStack>) {
        assert!(self.is_element(element), "Only elements can be unwrapped.");
        self.apply_edit(&Edit::Unwrap { element }, undo);
    }

    /// Merge a text node with the text siblings that directly follow it.
    pub fn merge_text_siblings(&mut self, node: NodeId, undo: Option<&mut UndoStack>) {
        assert!(self.is_text(node), "Only text nodes can be merged.");
        self.batched(undo, "Merge text", |tree, mut undo| {
            while let Some(next) = tree.next_sibling(node).filter(|&next| tree.is_text(next)) {
                tree.apply_edit(
                    &Edit::Join {
                        keep: node,
                        absorb: next,
                    },
                    undo.as_deref_mut(),
                );
            }
        });
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, index) = self.position(id)?;
        self.children(parent).get(index + 1).copied()
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, index) = self.position(id)?;
        index
            .checked_sub(1)
            .and_then(|previous| self.children(parent).get(previous).copied())
    }

    // ------------------------------------------------------------------
    // Internal accessors
    // ------------------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        self.nodes
            .get(id)
            .unwrap_or_else(|| panic!("Node {id:?} does not belong to this tree."))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.nodes
            .get_mut(id)
            .unwrap_or_else(|| panic!("Node {id:?} does not belong to this tree."))
    }

    pub(crate) fn children_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        match &mut self.node_mut(id).kind {
            NodeKind::Element(ElementData { children, .. }) => children,
            NodeKind::Text { .. } => panic!("Text nodes cannot have children."),
        }
    }

    pub(crate) fn text_contents(&self, id: NodeId) -> &str {
        match &self.node(id).kind {
            NodeKind::Text { contents } => contents,
            NodeKind::Element(_) => panic!("Expected a text node."),
        }
    }

    pub(crate) fn text_contents_mut(&mut self, id: NodeId) -> &mut String {
        match &mut self.node_mut(id).kind {
            NodeKind::Text { contents } => contents,
            NodeKind::Element(_) => panic!("Expected a text node."),
        }
    }

    /// Position of a node that must be attached
    pub(crate) fn expect_position(&self, id: NodeId) -> (NodeId, usize) {
        self.position(id)
            .unwrap_or_else(|| panic!("This scenario should not be possible: the node has no parent."))
    }
}
