use crate::{DomTree, NodeId};

/// Visitor pattern for traversing a [`DomTree`] immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, tree: &DomTree, node: NodeId) {
        walk_node(self, tree, node);
    }

    fn visit_element(&mut self, tree: &DomTree, element: NodeId) {
        walk_element(self, tree, element);
    }

    fn visit_text(&mut self, _tree: &DomTree, _text: NodeId) {
        // Leaf node, no children to walk
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, tree: &DomTree, node: NodeId) {
    if tree.is_text(node) {
        visitor.visit_text(tree, node);
    } else {
        visitor.visit_element(tree, node);
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, tree: &DomTree, element: NodeId) {
    for &child in tree.children(element) {
        visitor.visit_node(tree, child);
    }
}

/// Renders a tree as indented lines, one node per line.
///
/// Elements print as `<name attr="value">`, text nodes as their quoted
/// contents.
#[derive(Debug, Default)]
pub struct OutlinePrinter {
    depth: usize,
    lines: Vec<String>,
}

impl OutlinePrinter {
    pub fn print(tree: &DomTree, node: NodeId) -> String {
        let mut printer = Self::default();
        printer.visit_node(tree, node);
        printer.lines.join("\n")
    }
}

impl Visitor for OutlinePrinter {
    fn visit_element(&mut self, tree: &DomTree, element: NodeId) {
        let mut line = format!("{}<{}", "  ".repeat(self.depth), tree.name(element));
        for attribute in tree.attributes(element) {
            match &attribute.value {
                Some(value) => line.push_str(&format!(" {}=\"{}\"", attribute.name, value)),
                None => line.push_str(&format!(" {}", attribute.name)),
            }
        }
        line.push('>');
        self.lines.push(line);

        self.depth += 1;
        walk_element(self, tree, element);
        self.depth -= 1;
    }

    fn visit_text(&mut self, tree: &DomTree, text: NodeId) {
        self.lines
            .push(format!("{}{:?}", "  ".repeat(self.depth), tree.contents(text)));
    }
}
