//! Integration tests for the dom crate
//!
//! This tests:
//! - Undo/redo sequences over mixed edits
//! - Text preservation across splits and wraps
//! - Parent/child consistency after every edit
//! - Observer notification

use folio_dom::{
    Attribute, DomTree, Edit, ElementDescriptor, NodeId, OutlinePrinter, SharedEditCounter,
    TextRange, UndoStack,
};

/// Every child's parent handle points back at the element listing it.
fn assert_consistent(tree: &DomTree, node: NodeId) {
    if tree.is_text(node) {
        return;
    }
    for &child in tree.children(node) {
        assert_eq!(tree.parent(child), Some(node), "broken parent handle");
        assert_consistent(tree, child);
    }
}

fn paragraph_tree(texts: &[&str]) -> (DomTree, Vec<NodeId>) {
    let mut tree = DomTree::new("body");
    let root = tree.root();
    let leaves = texts
        .iter()
        .map(|text| {
            let leaf = tree.create_text(*text);
            tree.append_child(root, leaf, None);
            leaf
        })
        .collect();
    (tree, leaves)
}

#[test]
fn test_wrap_sequence_undo_redo() {
    let (mut tree, leaves) = paragraph_tree(&["Hello ", "brave ", "new world"]);
    let root = tree.root();
    let mut stack = UndoStack::new();
    let original = OutlinePrinter::print(&tree, root);

    let bold = ElementDescriptor::new("b");
    let italic = ElementDescriptor::new("i");
    tree.wrap_text_range(root, TextRange::new(3, 10), &bold, Some(&mut stack));
    let after_bold = OutlinePrinter::print(&tree, root);
    tree.wrap_text_range(root, TextRange::new(8, 8), &italic, Some(&mut stack));
    let after_italic = OutlinePrinter::print(&tree, root);

    assert_eq!(tree.text(root), "Hello brave new world");
    assert_consistent(&tree, root);
    assert_eq!(stack.undo_levels(), 2);

    stack.undo(&mut tree);
    assert_eq!(OutlinePrinter::print(&tree, root), after_bold);

    stack.undo(&mut tree);
    assert_eq!(OutlinePrinter::print(&tree, root), original);
    assert_eq!(tree.children(root), leaves.as_slice());

    stack.redo(&mut tree);
    stack.redo(&mut tree);
    assert_eq!(OutlinePrinter::print(&tree, root), after_italic);
    assert_consistent(&tree, root);
}

#[test]
fn test_wrap_preserves_text_for_every_range() {
    let text = "abcdefgh";
    for location in 0..text.len() {
        for length in 1..=(text.len() - location) {
            let (mut tree, _) = paragraph_tree(&["abc", "defgh"]);
            let root = tree.root();
            let wrapped = tree.wrap_text_range(
                root,
                TextRange::new(location, length),
                &ElementDescriptor::new("span"),
                None,
            );

            assert_eq!(tree.text(root), text);
            let covered: String = wrapped.iter().map(|&element| tree.text(element)).collect();
            assert_eq!(covered, &text[location..location + length]);
            assert_consistent(&tree, root);
        }
    }
}

fn assert_no_empty_leaves(tree: &DomTree) {
    for leaf in tree.text_leaves(tree.root()) {
        assert!(!tree.contents(leaf).is_empty(), "empty text node left in the tree");
    }
}

#[test]
fn test_empty_ranges_leave_tree_unchanged() {
    // Start, inside a leaf, on a leaf boundary and at the end.
    for location in [0, 1, 3, 8] {
        let (mut tree, leaves) = paragraph_tree(&["abc", "defgh"]);
        let root = tree.root();
        let wrapped = tree.wrap_text_range(
            root,
            TextRange::caret(location),
            &ElementDescriptor::new("span"),
            None,
        );

        assert!(wrapped.is_empty());
        assert_eq!(tree.children(root), leaves.as_slice());
        assert_no_empty_leaves(&tree);
    }

    for location in [0, 2, 5] {
        let (mut tree, leaves) = paragraph_tree(&["abc", "defgh"]);
        let root = tree.root();
        tree.split_for_range(leaves[1], TextRange::caret(location), None);

        assert_eq!(tree.children(root), leaves.as_slice());
        assert_eq!(tree.text(root), "abcdefgh");
        assert_no_empty_leaves(&tree);
    }
}

#[test]
#[should_panic(expected = "cannot wrap the empty range")]
fn test_wrap_range_rejects_empty_range_inside_node() {
    let (mut tree, leaves) = paragraph_tree(&["abcdef"]);
    tree.wrap_range(leaves[0], TextRange::caret(3), ElementDescriptor::new("b"), None);
}

#[test]
fn test_remove_replace_and_undo() {
    let (mut tree, leaves) = paragraph_tree(&["one", "two", "three"]);
    let root = tree.root();
    let mut stack = UndoStack::new();

    tree.remove(leaves[1], Some(&mut stack));
    assert_eq!(tree.text(root), "onethree");
    assert!(tree.contains(leaves[1]));
    assert_eq!(tree.parent(leaves[1]), None);

    let replacement = tree.create_text("3");
    tree.replace(leaves[2], replacement, Some(&mut stack));
    assert_eq!(tree.text(root), "one3");

    stack.undo(&mut tree);
    stack.undo(&mut tree);
    assert_eq!(tree.children(root), leaves.as_slice());
    assert_eq!(tree.parent(replacement), None);
}

#[test]
fn test_unwrap_undo_restores_element() {
    let mut tree = DomTree::new("body");
    let root = tree.root();
    let mut stack = UndoStack::new();
    let list = tree.create_element(
        ElementDescriptor::new("ul").with_attribute(Attribute::flag("reversed")),
    );
    let a = tree.create_text("a");
    let b = tree.create_text("b");
    tree.append_child(root, list, None);
    tree.append_child(list, a, None);
    tree.append_child(list, b, None);

    tree.unwrap(list, Some(&mut stack));
    assert_eq!(tree.children(root), &[a, b]);

    stack.undo(&mut tree);
    assert_eq!(tree.children(root), &[list]);
    assert_eq!(tree.children(list), &[a, b]);
    assert_eq!(tree.attributes(list), &[Attribute::flag("reversed")]);
}

#[test]
fn test_merge_text_siblings_after_splits() {
    let (mut tree, leaves) = paragraph_tree(&["Hello World"]);
    let root = tree.root();
    let mut stack = UndoStack::new();

    tree.split_at(leaves[0], 5, Some(&mut stack));
    tree.split_at(leaves[0], 2, Some(&mut stack));
    assert_eq!(tree.children(root).len(), 3);

    tree.merge_text_siblings(leaves[0], Some(&mut stack));
    assert_eq!(tree.children(root), leaves.as_slice());
    assert_eq!(tree.contents(leaves[0]), "Hello World");

    stack.undo(&mut tree);
    assert_eq!(tree.children(root).len(), 3);
    assert_eq!(tree.text(root), "Hello World");
}

#[test]
fn test_leaf_queries_after_wrap() {
    let (mut tree, leaves) = paragraph_tree(&["first ", "second"]);
    let root = tree.root();
    let element = tree.wrap_range(leaves[1], TextRange::new(0, 3), ElementDescriptor::new("em"), None);

    assert_eq!(tree.leaf_at(root, 7), Some((leaves[1], 1)));
    assert_eq!(tree.offset_in(root, element), 6);
    assert!(tree.is_ancestor_of(element, leaves[1]));
    assert_eq!(tree.ancestors(leaves[1]), vec![element, root]);
}

#[test]
fn test_observer_counts_replayed_edits() {
    let counter = SharedEditCounter::new();
    let (mut tree, leaves) = paragraph_tree(&["abc"]);
    let mut stack = UndoStack::new();
    tree.add_observer(Box::new(counter.clone()));

    let inverse = tree.apply_edit(
        &Edit::ReplaceCharacters {
            node: leaves[0],
            range: TextRange::new(1, 1),
            text: "B".to_string(),
        },
        Some(&mut stack),
    );
    assert!(matches!(inverse, Edit::ReplaceCharacters { .. }));

    stack.undo(&mut tree);
    stack.redo(&mut tree);

    assert_eq!(counter.count("replace-characters"), 3);
    assert_eq!(tree.contents(leaves[0]), "aBc");
}
