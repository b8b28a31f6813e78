//! # Undo/Redo Stack
//!
//! Optional capability passed to every mutating tree operation. When a stack
//! is supplied, each applied [`Edit`] is recorded together with its inverse.
//!
//! ## Design
//!
//! - Undo applies the recorded inverses (newest first) and moves the batch
//!   to the redo stack
//! - Redo reapplies the original edits
//! - New edits clear the redo stack
//! - Batches nest: composite operations (split-for-range, wrap-range) open a
//!   batch inside whatever batch the caller already opened, and only the
//!   outermost `end_batch` pushes an undo level
//!
//! ## Example
//!
//! ```rust
//! use folio_dom::{DomTree, UndoStack};
//!
//! let mut tree = DomTree::new("body");
//! let mut stack = UndoStack::new();
//! let text = tree.create_text("Hello");
//! tree.append_child(tree.root(), text, Some(&mut stack));
//! tree.append_text(text, " World", Some(&mut stack));
//!
//! stack.undo(&mut tree);
//! assert_eq!(tree.text(tree.root()), "Hello");
//! ```

use crate::{DomTree, Edit};

const DEFAULT_LEVELS: usize = 100;

/// Edits applied by one user-level operation, undone and redone as a unit.
/// Both lists are kept in application order.
#[derive(Debug, Clone, Default)]
pub struct EditBatch {
    pub edits: Vec<Edit>,
    pub inverses: Vec<Edit>,
    /// Label shown for the operation, e.g. "Wrap text"
    pub description: Option<String>,
}

impl EditBatch {
    fn push(&mut self, edit: Edit, inverse: Edit) {
        self.edits.push(edit);
        self.inverses.push(inverse);
    }

    /// Restore the tree to its state before the batch.
    fn revert(&self, tree: &mut DomTree) {
        for inverse in self.inverses.iter().rev() {
            tree.apply_edit(inverse, None);
        }
    }

    fn reapply(&self, tree: &mut DomTree) {
        for edit in &self.edits {
            tree.apply_edit(edit, None);
        }
    }
}

/// Undo history for a [`DomTree`]
#[derive(Debug)]
pub struct UndoStack {
    /// Batches that can be undone, newest last
    applied: Vec<EditBatch>,
    /// Batches that can be redone, newest last
    undone: Vec<EditBatch>,
    /// 0 keeps every level
    max_levels: usize,
    open: Option<EditBatch>,
    depth: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_LEVELS)
    }

    /// Keep at most `max_levels` undo levels, dropping the oldest first.
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            applied: Vec::new(),
            undone: Vec::new(),
            max_levels,
            open: None,
            depth: 0,
        }
    }

    /// Record an applied edit and its inverse. Outside a batch the edit
    /// becomes its own undo level.
    pub fn record(&mut self, edit: Edit, inverse: Edit) {
        match &mut self.open {
            Some(batch) => batch.push(edit, inverse),
            None => {
                let mut batch = EditBatch::default();
                batch.push(edit, inverse);
                self.commit(batch);
            }
        }
    }

    pub fn begin_batch(&mut self) {
        if self.depth == 0 {
            self.open = Some(EditBatch::default());
        }
        self.depth += 1;
    }

    /// Close a batch. Closing the outermost one commits its edits as a
    /// single undo level; a batch with no edits leaves no level.
    pub fn end_batch(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return;
        }
        if let Some(batch) = self.open.take().filter(|batch| !batch.edits.is_empty()) {
            self.commit(batch);
        }
    }

    /// Label the open batch. The outermost label wins, so composite
    /// operations never rename the caller's batch.
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = self.open.as_mut().filter(|batch| batch.description.is_none()) {
            batch.description = Some(description.into());
        }
    }

    fn commit(&mut self, batch: EditBatch) {
        self.applied.push(batch);
        if self.max_levels > 0 && self.applied.len() > self.max_levels {
            let excess = self.applied.len() - self.max_levels;
            self.applied.drain(..excess);
        }
        // Undone batches no longer apply on top of the new edit.
        self.undone.clear();
    }

    /// Revert the newest batch. Returns false when there is nothing to undo.
    pub fn undo(&mut self, tree: &mut DomTree) -> bool {
        let Some(batch) = self.applied.pop() else {
            return false;
        };
        batch.revert(tree);
        self.undone.push(batch);
        true
    }

    /// Reapply the newest undone batch. Returns false when there is nothing to redo.
    pub fn redo(&mut self, tree: &mut DomTree) -> bool {
        let Some(batch) = self.undone.pop() else {
            return false;
        };
        batch.reapply(tree);
        self.applied.push(batch);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.applied.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.undone.len()
    }

    /// Forget all history, including a batch still open.
    pub fn clear(&mut self) {
        self.applied.clear();
        self.undone.clear();
        self.open = None;
        self.depth = 0;
    }

    /// Label of the batch `undo` would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.applied.last()?.description.as_deref()
    }

    /// Label of the batch `redo` would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.undone.last()?.description.as_deref()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
