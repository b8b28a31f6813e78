//! End-to-end formatting scenarios: range formatting, list continuation,
//! marker numbering and the DOM mirror working on the same text.

use folio_common::TextRange;
use folio_format::{
    mirror, paragraph_markers, AttributedText, BlockquoteFormatter, DivFormatter, ListFormatter,
    ParagraphFormatter, TextStorage,
};
use folio_style::{ListStyle, PropertyKind, TextList};

fn marker_texts(text: &AttributedText) -> Vec<Option<String>> {
    paragraph_markers(text)
        .into_iter()
        .map(|marker| marker.map(|marker| marker.text))
        .collect()
}

#[test]
fn test_wrapping_gap_paragraph_continues_numbering() {
    let mut text = AttributedText::new("alpha\nbeta\ngamma\ndelta");
    let bullets = ParagraphFormatter::from(ListFormatter::new(ListStyle::Ordered));

    bullets.apply_to_range(&mut text, TextRange::new(0, 1), None);
    bullets.apply_to_range(&mut text, TextRange::new(12, 1), None);
    assert_eq!(
        marker_texts(&text),
        vec![Some("1.".to_string()), None, Some("1.".to_string()), None]
    );

    bullets.apply_to_range(&mut text, TextRange::new(7, 1), None);
    assert_eq!(
        marker_texts(&text),
        vec![
            Some("1.".to_string()),
            Some("2.".to_string()),
            Some("3.".to_string()),
            None
        ]
    );

    let tree = mirror::build_tree(&text);
    let root = tree.root();
    assert_eq!(tree.name(tree.children(root)[0]), "ol");
    assert_eq!(tree.children(tree.children(root)[0]).len(), 3);
}

#[test]
fn test_list_inside_blockquote() {
    let mut text = AttributedText::new("quote\nitem one\nitem two");
    ParagraphFormatter::from(BlockquoteFormatter::new()).apply_to_range(&mut text, TextRange::new(0, 23), None);
    ListFormatter::new(ListStyle::Unordered).apply_attributes_to(&mut text, TextRange::new(6, 17));

    let style = text.attributes_at(10).paragraph_style().cloned().unwrap();
    assert_eq!(style.properties[0].kind(), PropertyKind::Blockquote);
    assert_eq!(style.lists(), vec![&TextList::new(ListStyle::Unordered)]);

    let tree = mirror::build_tree(&text);
    let blockquote = tree.children(tree.root())[0];
    assert_eq!(tree.name(blockquote), "blockquote");
    let names: Vec<_> = tree
        .children(blockquote)
        .iter()
        .map(|&child| tree.name(child).to_string())
        .collect();
    assert_eq!(names, vec!["text", "ul"]);
}

#[test]
fn test_toggle_list_off_keeps_blockquote() {
    let mut text = AttributedText::new("line");
    let quote = ParagraphFormatter::from(BlockquoteFormatter::new());
    let list = ParagraphFormatter::from(ListFormatter::new(ListStyle::Ordered));

    quote.toggle(&mut text, TextRange::new(0, 0));
    list.toggle(&mut text, TextRange::new(0, 0));
    assert!(list.present_at(&text, 0));

    list.toggle(&mut text, TextRange::new(0, 0));
    assert!(!list.present_at(&text, 0));
    assert!(quote.present_at(&text, 0));
}

#[test]
fn test_div_range_resets_spacing_on_every_paragraph() {
    let mut text = AttributedText::new("a\nb\nc");
    ParagraphFormatter::from(DivFormatter::new()).apply_to_range(&mut text, TextRange::new(1, 2), None);

    for paragraph in text.paragraph_ranges() {
        let attributes = text.attributes_at(paragraph.location);
        match attributes.paragraph_style() {
            Some(style) => {
                assert_eq!(style.divs().len(), 1);
                assert_eq!(style.spacing_before, 0.0);
                assert_eq!(style.spacing_after, 0.0);
            }
            None => assert_eq!(paragraph.location, 4),
        }
    }
}

#[test]
fn test_remove_from_range_leaves_other_lists() {
    let mut text = AttributedText::new("x\ny");
    ListFormatter::new(ListStyle::Unordered).apply_attributes_to(&mut text, TextRange::new(0, 3));

    let ordered = ParagraphFormatter::from(ListFormatter::new(ListStyle::Ordered));
    let before = text.clone();
    ordered.remove_from_range(&mut text, TextRange::new(0, 3));
    assert_eq!(text, before);

    let unordered = ParagraphFormatter::from(ListFormatter::new(ListStyle::Unordered));
    unordered.remove_from_range(&mut text, TextRange::new(0, 3));
    assert!(marker_texts(&text).iter().all(Option::is_none));
}
