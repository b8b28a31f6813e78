//! # DOM Mirror
//!
//! Builds the node tree that mirrors attributed text. Each paragraph opens
//! its properties as nested elements, outermost first:
//!
//! ```text
//! [List(ol), ListItem]   "one"  ─┐      <ol>
//! [List(ol), ListItem]   "two"   ├──▶     <li>one</li>
//!                                │        <li>two</li>
//!                                │      </ol>
//! ```
//!
//! Lists, divs and blockquotes are containers: consecutive paragraphs with
//! equal containers share them. List items, paragraphs, headers and
//! preformatted blocks belong to one paragraph, except a list item that
//! still has a nested list item inside it.

use crate::storage::TextStorage;
use crate::{AttributeKey, Attributes};
use folio_common::Attribute;
use folio_dom::{DomTree, ElementDescriptor, NodeId};
use folio_style::{ParagraphProperty, ParagraphStyle, PropertyKind};
use tracing::{instrument, trace};

pub const ROOT_ELEMENT: &str = "body";
pub const LINE_BREAK_ELEMENT: &str = "br";

#[instrument(level = "debug", skip(text), fields(length = text.len()))]
pub fn build_tree<T>(text: &T) -> DomTree
where
    T: TextStorage + ?Sized,
{
    let mut tree = DomTree::new(ROOT_ELEMENT);
    let mut open: Vec<(ParagraphProperty, NodeId)> = Vec::new();
    let mut last_bare_container = None;

    for paragraph in text.paragraph_ranges() {
        let attributes = text.attributes_at(paragraph.location);
        let properties = expanded_properties(attributes.paragraph_style());

        let shared = open
            .iter()
            .zip(&properties)
            .enumerate()
            .take_while(|(index, ((open_property, _), property))| {
                is_shareable(&properties, *index) && open_property == *property
            })
            .count();
        open.truncate(shared);

        let mut container = open.last().map_or(tree.root(), |(_, element)| *element);
        for property in &properties[shared..] {
            let element = tree.create_element(descriptor_for(property));
            tree.append_child(container, element, None);
            open.push((property.clone(), element));
            container = element;
        }

        let bare = properties
            .last()
            .map_or(true, |property| is_container(property.kind()));
        if bare {
            if last_bare_container == Some(container) {
                let line_break = tree.create_element(ElementDescriptor::new(LINE_BREAK_ELEMENT));
                tree.append_child(container, line_break, None);
            }
            last_bare_container = Some(container);
        } else {
            last_bare_container = None;
        }

        let content = text.without_terminator(paragraph);
        trace!(paragraph = %paragraph, depth = properties.len(), bare, "mirroring paragraph");
        for (run, run_attributes) in text.attribute_runs(content) {
            let mut node = tree.create_text(text.substring(run));
            tree.append_child(container, node, None);
            for descriptor in inline_descriptors(&run_attributes) {
                node = tree.wrap(node, descriptor, None);
            }
        }
    }

    tree
}

/// The style's properties with an implicit list item after every list that
/// lacks one.
fn expanded_properties(style: Option<&ParagraphStyle>) -> Vec<ParagraphProperty> {
    let Some(style) = style else {
        return Vec::new();
    };

    let mut expanded = Vec::with_capacity(style.properties.len());
    for (index, property) in style.properties.iter().enumerate() {
        expanded.push(property.clone());
        let followed_by_item = style
            .properties
            .get(index + 1)
            .is_some_and(|next| next.kind() == PropertyKind::ListItem);
        if property.kind() == PropertyKind::List && !followed_by_item {
            expanded.push(ParagraphProperty::list_item(None));
        }
    }
    expanded
}

fn is_container(kind: PropertyKind) -> bool {
    matches!(kind, PropertyKind::List | PropertyKind::Div | PropertyKind::Blockquote)
}

fn is_shareable(properties: &[ParagraphProperty], index: usize) -> bool {
    match properties[index].kind() {
        PropertyKind::ListItem => properties[index + 1..]
            .iter()
            .any(|property| property.kind() == PropertyKind::ListItem),
        kind => is_container(kind),
    }
}

fn descriptor_for(property: &ParagraphProperty) -> ElementDescriptor {
    let mut descriptor = ElementDescriptor::new(property.html_tag());
    if let Some(list) = property.as_list() {
        if let Some(start) = list.start() {
            descriptor = descriptor.with_attribute(Attribute::new("start", start.to_string()));
        }
        if list.reversed() {
            descriptor = descriptor.with_attribute(Attribute::flag("reversed"));
        }
    }
    if let Some(representation) = property.representation() {
        descriptor = descriptor.with_representation(representation.clone());
    }
    descriptor
}

/// Inline elements for a run, innermost first
fn inline_descriptors(attributes: &Attributes) -> Vec<ElementDescriptor> {
    let mut descriptors = Vec::new();
    if let Some(href) = attributes.text(AttributeKey::Link) {
        descriptors.push(ElementDescriptor::new("a").with_attribute(Attribute::new("href", href)));
    }
    for (key, name) in [
        (AttributeKey::Strikethrough, "s"),
        (AttributeKey::Underline, "u"),
        (AttributeKey::Italic, "i"),
        (AttributeKey::Bold, "b"),
    ] {
        if attributes.flag(key) {
            descriptors.push(ElementDescriptor::new(name));
        }
    }
    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributedText;
    use folio_dom::OutlinePrinter;
    use folio_style::{ListStyle, TextList};

    fn styled(properties: Vec<ParagraphProperty>) -> Attributes {
        Attributes::new().with_paragraph_style(ParagraphStyle::with_properties(properties))
    }

    fn outline(text: &AttributedText) -> String {
        let tree = build_tree(text);
        OutlinePrinter::print(&tree, tree.root())
    }

    #[test]
    fn test_bare_paragraphs_get_line_breaks() {
        let text = AttributedText::new("one\ntwo");
        assert_eq!(outline(&text), "<body>\n  \"one\"\n  <br>\n  \"two\"");
    }

    #[test]
    fn test_list_paragraphs_share_one_list() {
        let list = TextList::with_numbering(ListStyle::Ordered, Some(3), true);
        let mut text = AttributedText::default();
        text.push_str("first\nsecond", styled(vec![list.into()]));

        assert_eq!(
            outline(&text),
            [
                "<body>",
                "  <ol start=\"3\" reversed>",
                "    <li>",
                "      \"first\"",
                "    <li>",
                "      \"second\"",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_different_lists_do_not_share() {
        let mut text = AttributedText::default();
        text.push_str("a\n", styled(vec![TextList::new(ListStyle::Ordered).into()]));
        text.push_str("b", styled(vec![TextList::new(ListStyle::Unordered).into()]));

        let tree = build_tree(&text);
        let names: Vec<_> = tree
            .children(tree.root())
            .iter()
            .map(|&child| tree.name(child).to_string())
            .collect();
        assert_eq!(names, vec!["ol", "ul"]);
    }

    #[test]
    fn test_nested_list_stays_inside_item() {
        let outer = TextList::new(ListStyle::Ordered);
        let mut text = AttributedText::default();
        text.push_str("one\n", styled(vec![outer.clone().into()]));
        text.push_str(
            "sub",
            styled(vec![
                outer.into(),
                ParagraphProperty::list_item(None),
                TextList::new(ListStyle::Unordered).into(),
            ]),
        );

        assert_eq!(
            outline(&text),
            [
                "<body>",
                "  <ol>",
                "    <li>",
                "      \"one\"",
                "      <ul>",
                "        <li>",
                "          \"sub\"",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_paragraph_adds_no_text() {
        let mut text = AttributedText::default();
        text.push_str("\nafter", styled(vec![ParagraphProperty::header(1, None).unwrap()]));

        let tree = build_tree(&text);
        let root = tree.root();
        assert_eq!(tree.children(root).len(), 2);
        assert!(tree.children(tree.children(root)[0]).is_empty());
        assert_eq!(tree.text(tree.children(root)[1]), "after");
    }

    #[test]
    fn test_inline_attributes_become_elements() {
        let mut text = AttributedText::new("plain ");
        text.push_str(
            "strong link",
            Attributes::new()
                .with_flag(AttributeKey::Bold)
                .with(AttributeKey::Link, crate::AttributeValue::Text("https://example.com".into())),
        );

        assert_eq!(
            outline(&text),
            [
                "<body>",
                "  \"plain \"",
                "  <b>",
                "    <a href=\"https://example.com\">",
                "      \"strong link\"",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_bare_paragraphs_inside_div() {
        let mut text = AttributedText::default();
        text.push_str("x\ny", styled(vec![ParagraphProperty::div(None)]));

        assert_eq!(
            outline(&text),
            "<body>\n  <div>\n    \"x\"\n    <br>\n    \"y\""
        );
    }

    #[test]
    fn test_tree_text_matches_paragraph_text() {
        let mut text = AttributedText::new("intro\n");
        text.push_str("quoted\n", styled(vec![ParagraphProperty::blockquote(None)]));
        text.push_str("item", styled(vec![TextList::new(ListStyle::Unordered).into()]));

        let tree = build_tree(&text);
        assert_eq!(tree.text(tree.root()), "introquoteditem");
    }
}
