//! # Edit Observers
//!
//! The notify-on-mutation hook. Observers registered on a
//! [`DomTree`](crate::DomTree) see every applied [`Edit`], including edits
//! replayed by undo and redo, after the tree has changed.

use crate::{DomTree, Edit};

/// Receives a callback after each applied edit
pub trait EditObserver: std::fmt::Debug {
    fn did_apply(&mut self, edit: &Edit, tree: &DomTree);
}

/// Counts applied edits by kind; handy for diagnostics and tests.
#[derive(Debug, Default)]
pub struct EditCounter {
    counts: std::collections::BTreeMap<&'static str, usize>,
}

impl EditCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl EditObserver for EditCounter {
    fn did_apply(&mut self, edit: &Edit, _tree: &DomTree) {
        *self.counts.entry(edit.name()).or_insert(0) += 1;
    }
}

/// Forwards every edit to a shared counter so the caller can keep reading
/// it after the tree takes ownership of the observer.
#[derive(Debug, Clone, Default)]
pub struct SharedEditCounter {
    inner: std::rc::Rc<std::cell::RefCell<EditCounter>>,
}

impl SharedEditCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> usize {
        self.inner.borrow().count(name)
    }

    pub fn total(&self) -> usize {
        self.inner.borrow().total()
    }
}

impl EditObserver for SharedEditCounter {
    fn did_apply(&mut self, edit: &Edit, tree: &DomTree) {
        self.inner.borrow_mut().did_apply(edit, tree);
    }
}
