use crate::storage::TextStorage;
use crate::ListFormatter;
use folio_style::TextList;

/// Marker of a list paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// Nesting depth, 1 for a top-level list
    pub depth: usize,
    pub number: usize,
    pub text: String,
}

struct Item {
    list: TextList,
    depth: usize,
    group: usize,
    index: usize,
}

/// Marker for every paragraph of `text`, `None` outside lists.
///
/// Consecutive paragraphs whose lists are equal level by level count as
/// items of one list; a paragraph outside any list ends every open list.
pub fn paragraph_markers<T>(text: &T) -> Vec<Option<ListMarker>>
where
    T: TextStorage + ?Sized,
{
    let mut item_counts: Vec<usize> = Vec::new();
    let mut open: Vec<(TextList, usize)> = Vec::new();
    let mut items = Vec::new();

    for paragraph in text.paragraph_ranges() {
        let lists = ListFormatter::lists(&text.attributes_at(paragraph.location));
        let depth = lists.len();
        if depth == 0 {
            open.clear();
            items.push(None);
            continue;
        }

        let kept = open
            .iter()
            .zip(&lists)
            .take_while(|((open_list, _), list)| open_list == *list)
            .count();
        open.truncate(kept);
        for list in &lists[kept..] {
            item_counts.push(0);
            open.push((list.clone(), item_counts.len() - 1));
        }

        let (list, group) = open[depth - 1].clone();
        let index = item_counts[group];
        item_counts[group] += 1;
        items.push(Some(Item {
            list,
            depth,
            group,
            index,
        }));
    }

    items
        .into_iter()
        .map(|item| {
            item.map(|item| {
                let number = item.list.item_number(item.index, item_counts[item.group]);
                ListMarker {
                    depth: item.depth,
                    number,
                    text: item.list.marker_text(number, item.depth),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, AttributedText};
    use folio_style::{ListStyle, ParagraphProperty, ParagraphStyle};

    fn styled(lists: &[&TextList]) -> Attributes {
        let mut properties = Vec::new();
        for list in lists {
            properties.push(ParagraphProperty::list((*list).clone()));
            properties.push(ParagraphProperty::list_item(None));
        }
        Attributes::new().with_paragraph_style(ParagraphStyle::with_properties(properties))
    }

    fn marker_texts(text: &AttributedText) -> Vec<Option<String>> {
        paragraph_markers(text)
            .into_iter()
            .map(|marker| marker.map(|marker| marker.text))
            .collect()
    }

    #[test]
    fn test_nested_numbering() {
        let outer = TextList::new(ListStyle::Ordered);
        let inner = TextList::new(ListStyle::Ordered);
        let mut text = AttributedText::default();
        text.push_str("one\n", styled(&[&outer]));
        text.push_str("one-a\n", styled(&[&outer, &inner]));
        text.push_str("one-b\n", styled(&[&outer, &inner]));
        text.push_str("two\n", styled(&[&outer]));
        text.push_str("plain", Attributes::new());

        assert_eq!(
            marker_texts(&text),
            vec![
                Some("1.".to_string()),
                Some("a.".to_string()),
                Some("b.".to_string()),
                Some("2.".to_string()),
                None
            ]
        );
    }

    #[test]
    fn test_reversed_counts_down_from_item_count() {
        let list = TextList::with_numbering(ListStyle::Ordered, None, true);
        let mut text = AttributedText::default();
        text.push_str("a\nb\nc", styled(&[&list]));

        let numbers: Vec<_> = paragraph_markers(&text)
            .into_iter()
            .map(|marker| marker.map(|marker| marker.number))
            .collect();
        assert_eq!(numbers, vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn test_plain_paragraph_restarts_numbering() {
        let list = TextList::with_numbering(ListStyle::Ordered, Some(5), false);
        let mut text = AttributedText::default();
        text.push_str("a\n", styled(&[&list]));
        text.push_str("break\n", Attributes::new());
        text.push_str("b", styled(&[&list]));

        assert_eq!(
            marker_texts(&text),
            vec![Some("5.".to_string()), None, Some("5.".to_string())]
        );
    }

    #[test]
    fn test_bullets_by_depth() {
        let outer = TextList::new(ListStyle::Unordered);
        let inner = TextList::new(ListStyle::Unordered);
        let mut text = AttributedText::default();
        text.push_str("x\n", styled(&[&outer]));
        text.push_str("y", styled(&[&outer, &inner]));

        assert_eq!(
            marker_texts(&text),
            vec![Some("\u{2022}".to_string()), Some("\u{25E6}".to_string())]
        );
    }
}
