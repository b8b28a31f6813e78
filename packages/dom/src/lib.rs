//! # Folio DOM
//!
//! Mutable node tree for rich text, built for paragraph formatting.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ format: attributed text + paragraph styles  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ dom: element/text node tree                 │
//! │  - Structural edits (insert, wrap, unwrap)  │
//! │  - Character edits on text nodes            │
//! │  - Split and wrap of text ranges            │
//! │  - Undo/redo through inverse edits          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ observers: notified after each edit         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One mutation path**: every change is an [`Edit`] applied through
//!    [`DomTree::apply_edit`]
//! 2. **Edits invert**: applying an edit yields the edit that undoes it
//! 3. **Characters, not bytes**: ranges count Unicode scalar values
//! 4. **Nodes outlive detachment**: removed nodes stay addressable so undo
//!    and redo can reattach them
//!
//! ## Usage
//!
//! ```rust
//! use folio_common::TextRange;
//! use folio_dom::{DomTree, ElementDescriptor, UndoStack};
//!
//! let mut tree = DomTree::new("body");
//! let mut stack = UndoStack::new();
//!
//! let text = tree.create_text("Hello World");
//! tree.append_child(tree.root(), text, None);
//!
//! let bold = tree.wrap_range(text, TextRange::new(6, 5), ElementDescriptor::new("b"), Some(&mut stack));
//! assert_eq!(tree.text(bold), "World");
//!
//! stack.undo(&mut tree);
//! assert_eq!(tree.children(tree.root()), &[text]);
//! ```

mod edit;
mod node;
mod observer;
mod text;
mod tree;
mod undo_stack;
mod visitor;

pub use edit::{Edit, Side};
pub use node::{ElementDescriptor, NodeId, TEXT_NODE_NAME};
pub use observer::{EditCounter, EditObserver, SharedEditCounter};
pub use tree::DomTree;
pub use undo_stack::{EditBatch, UndoStack};
pub use visitor::{walk_element, walk_node, OutlinePrinter, Visitor};

// Re-export common types for convenience
pub use folio_common::{Attribute, HtmlRepresentation, TextRange};
