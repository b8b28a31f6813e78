use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_dom::{DomTree, ElementDescriptor, TextRange, UndoStack};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. ";

fn tree_with_leaves(count: usize) -> DomTree {
    let mut tree = DomTree::new("body");
    let root = tree.root();
    for _ in 0..count {
        let text = tree.create_text(PARAGRAPH);
        tree.append_child(root, text, None);
    }
    tree
}

fn split_for_range(c: &mut Criterion) {
    c.bench_function("split_for_range", |b| {
        b.iter(|| {
            let mut tree = tree_with_leaves(1);
            let leaf = tree.children(tree.root())[0];
            tree.split_for_range(leaf, black_box(TextRange::new(4, 15)), None);
            tree
        })
    });
}

fn wrap_text_range_many_leaves(c: &mut Criterion) {
    let descriptor = ElementDescriptor::new("mark");

    c.bench_function("wrap_text_range_100_leaves", |b| {
        b.iter(|| {
            let mut tree = tree_with_leaves(100);
            let root = tree.root();
            let length = tree.length(root);
            tree.wrap_text_range(root, black_box(TextRange::new(10, length - 20)), &descriptor, None);
            tree
        })
    });
}

fn wrap_then_undo(c: &mut Criterion) {
    let descriptor = ElementDescriptor::new("b");

    c.bench_function("wrap_text_range_then_undo", |b| {
        b.iter(|| {
            let mut tree = tree_with_leaves(20);
            let mut stack = UndoStack::new();
            let root = tree.root();
            tree.wrap_text_range(root, TextRange::new(5, 400), &descriptor, Some(&mut stack));
            stack.undo(&mut tree);
            tree
        })
    });
}

criterion_group!(benches, split_for_range, wrap_text_range_many_leaves, wrap_then_undo);
criterion_main!(benches);
