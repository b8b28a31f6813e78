//! # Paragraph Formatters
//!
//! Stateless transformations of a paragraph's attributes. Each formatter
//! adds (`apply`), removes (`remove`) or detects (`present`) one kind of
//! paragraph property, always returning a new mapping.
//!
//! [`ParagraphFormatter`] closes the family and adds the range-level
//! operations shared by all of them: formatting is applied to whole
//! paragraphs, one attribute run at a time.

mod blockquote;
mod div;
mod header;
mod list;

pub use blockquote::BlockquoteFormatter;
pub use div::DivFormatter;
pub use header::HeaderFormatter;
pub use list::ListFormatter;

use crate::storage::TextStorage;
use crate::Attributes;
use folio_common::{HtmlRepresentation, TextRange};
use tracing::debug;

/// `range` expanded to whole paragraphs; the input range for empty text
pub fn application_range<T>(range: TextRange, text: &T) -> TextRange
where
    T: TextStorage + ?Sized,
{
    if text.is_empty() {
        return range;
    }
    text.paragraph_range(range)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphFormatter {
    Div(DivFormatter),
    List(ListFormatter),
    Blockquote(BlockquoteFormatter),
    Header(HeaderFormatter),
}

impl ParagraphFormatter {
    pub fn name(&self) -> &'static str {
        match self {
            ParagraphFormatter::Div(_) => "div",
            ParagraphFormatter::List(_) => "list",
            ParagraphFormatter::Blockquote(_) => "blockquote",
            ParagraphFormatter::Header(_) => "header",
        }
    }

    pub fn apply(&self, attributes: &Attributes, representation: Option<HtmlRepresentation>) -> Attributes {
        match self {
            ParagraphFormatter::Div(formatter) => formatter.apply(attributes, representation),
            ParagraphFormatter::List(formatter) => formatter.apply(attributes, representation),
            ParagraphFormatter::Blockquote(formatter) => formatter.apply(attributes, representation),
            ParagraphFormatter::Header(formatter) => formatter.apply(attributes, representation),
        }
    }

    pub fn remove(&self, attributes: &Attributes) -> Attributes {
        match self {
            ParagraphFormatter::Div(formatter) => formatter.remove(attributes),
            ParagraphFormatter::List(formatter) => formatter.remove(attributes),
            ParagraphFormatter::Blockquote(formatter) => formatter.remove(attributes),
            ParagraphFormatter::Header(formatter) => formatter.remove(attributes),
        }
    }

    pub fn present(&self, attributes: &Attributes) -> bool {
        match self {
            ParagraphFormatter::Div(formatter) => formatter.present(attributes),
            ParagraphFormatter::List(formatter) => formatter.present(attributes),
            ParagraphFormatter::Blockquote(formatter) => formatter.present(attributes),
            ParagraphFormatter::Header(formatter) => formatter.present(attributes),
        }
    }

    /// Attributes a caller may use while the formatted paragraph is empty
    pub fn placeholder_attributes(&self) -> Option<&Attributes> {
        match self {
            ParagraphFormatter::Div(formatter) => formatter.placeholder_attributes(),
            ParagraphFormatter::List(formatter) => formatter.placeholder_attributes(),
            ParagraphFormatter::Blockquote(formatter) => formatter.placeholder_attributes(),
            ParagraphFormatter::Header(formatter) => formatter.placeholder_attributes(),
        }
    }

    /// Apply to every paragraph touched by `range`, returning the range
    /// actually formatted. Lists continue their neighbours; see
    /// [`ListFormatter::apply_attributes_to`].
    pub fn apply_to_range<T>(
        &self,
        text: &mut T,
        range: TextRange,
        representation: Option<HtmlRepresentation>,
    ) -> TextRange
    where
        T: TextStorage + ?Sized,
    {
        if let ParagraphFormatter::List(formatter) = self {
            return formatter.apply_attributes_to(text, range);
        }

        let range_to_apply = application_range(range, text);
        for (run, attributes) in text.attribute_runs(range_to_apply) {
            let applied = self.apply(&attributes, representation.clone());
            text.add_attributes(&applied, run);
        }
        debug!(formatter = self.name(), range = %range_to_apply, "applied");
        range_to_apply
    }

    pub fn remove_from_range<T>(&self, text: &mut T, range: TextRange) -> TextRange
    where
        T: TextStorage + ?Sized,
    {
        let range_to_apply = application_range(range, text);
        for (run, attributes) in text.attribute_runs(range_to_apply) {
            let removed = self.remove(&attributes);
            if removed != attributes {
                text.set_attributes(&removed, run);
            }
        }
        debug!(formatter = self.name(), range = %range_to_apply, "removed");
        range_to_apply
    }

    /// `present` at a location; the end of the text reads the last
    /// character.
    pub fn present_at<T>(&self, text: &T, location: usize) -> bool
    where
        T: TextStorage + ?Sized,
    {
        if text.is_empty() {
            return false;
        }
        let location = location.min(text.len() - 1);
        self.present(&text.attributes_at(location))
    }

    /// Remove when present at the start of `range`, apply otherwise
    pub fn toggle<T>(&self, text: &mut T, range: TextRange) -> TextRange
    where
        T: TextStorage + ?Sized,
    {
        if self.present_at(text, range.location) {
            self.remove_from_range(text, range)
        } else {
            self.apply_to_range(text, range, None)
        }
    }
}

impl From<DivFormatter> for ParagraphFormatter {
    fn from(formatter: DivFormatter) -> Self {
        ParagraphFormatter::Div(formatter)
    }
}

impl From<ListFormatter> for ParagraphFormatter {
    fn from(formatter: ListFormatter) -> Self {
        ParagraphFormatter::List(formatter)
    }
}

impl From<BlockquoteFormatter> for ParagraphFormatter {
    fn from(formatter: BlockquoteFormatter) -> Self {
        ParagraphFormatter::Blockquote(formatter)
    }
}

impl From<HeaderFormatter> for ParagraphFormatter {
    fn from(formatter: HeaderFormatter) -> Self {
        ParagraphFormatter::Header(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeKey, AttributedText};
    use folio_style::{ListStyle, ParagraphStyle, PropertyKind};

    fn formatters() -> Vec<ParagraphFormatter> {
        vec![
            DivFormatter::new().into(),
            ListFormatter::new(ListStyle::Ordered).into(),
            ListFormatter::new(ListStyle::Unordered).into(),
            BlockquoteFormatter::new().into(),
            HeaderFormatter::new(2).unwrap().into(),
        ]
    }

    fn samples() -> Vec<Attributes> {
        vec![
            Attributes::new(),
            Attributes::new().with_flag(AttributeKey::Italic),
            Attributes::new().with_paragraph_style(ParagraphStyle::with_properties(vec![
                folio_style::ParagraphProperty::blockquote(None),
            ])),
        ]
    }

    #[test]
    fn test_present_after_apply() {
        for formatter in formatters() {
            for attributes in samples() {
                let applied = formatter.apply(&attributes, None);
                assert!(formatter.present(&applied), "{} not present", formatter.name());
            }
        }
    }

    #[test]
    fn test_remove_undoes_single_apply() {
        for formatter in formatters() {
            for attributes in samples() {
                let before = attributes.paragraph_style().cloned().unwrap_or_default();
                let removed = formatter.remove(&formatter.apply(&attributes, None));
                let after = removed.paragraph_style().cloned().unwrap_or_default();
                assert_eq!(after.properties, before.properties, "{}", formatter.name());
            }
        }
    }

    #[test]
    fn test_remove_absent_returns_input() {
        for formatter in formatters() {
            let attributes = Attributes::new().with_flag(AttributeKey::Bold);
            assert_eq!(formatter.remove(&attributes), attributes);
        }
    }

    #[test]
    fn test_apply_to_range_covers_paragraphs() {
        let mut text = AttributedText::new("intro\nquote me\noutro");
        let formatter = ParagraphFormatter::from(BlockquoteFormatter::new());
        let applied = formatter.apply_to_range(&mut text, TextRange::new(8, 2), None);

        assert_eq!(applied, TextRange::new(6, 9));
        assert!(!formatter.present_at(&text, 0));
        assert!(formatter.present_at(&text, 6));
        assert!(formatter.present_at(&text, 14));
        assert!(!formatter.present_at(&text, 15));
    }

    #[test]
    fn test_present_at_end_reads_last_character() {
        let formatter = ParagraphFormatter::from(DivFormatter::new());
        let mut text = AttributedText::new("only");
        formatter.apply_to_range(&mut text, TextRange::new(0, 0), None);

        assert!(formatter.present_at(&text, 4));
        assert!(!formatter.present_at(&AttributedText::default(), 0));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut text = AttributedText::new("one\ntwo");
        let original = text.clone();
        let formatter = ParagraphFormatter::from(HeaderFormatter::new(1).unwrap());

        formatter.toggle(&mut text, TextRange::new(0, 1));
        assert_eq!(
            text.attributes_at(0).paragraph_style().and_then(ParagraphStyle::header_level),
            Some(1)
        );

        formatter.toggle(&mut text, TextRange::new(0, 1));
        let style = text.attributes_at(0).paragraph_style().cloned().unwrap_or_default();
        assert!(!style.contains(PropertyKind::Header));
        assert_eq!(text.string(), original.string());
    }

    #[test]
    fn test_apply_is_idempotent_for_lists() {
        let mut text = AttributedText::new("a\nb");
        let formatter = ParagraphFormatter::from(ListFormatter::new(ListStyle::Unordered));

        formatter.apply_to_range(&mut text, TextRange::new(0, 3), None);
        let once = text.clone();
        formatter.apply_to_range(&mut text, TextRange::new(0, 3), None);

        assert_eq!(text, once);
    }

    #[test]
    fn test_placeholder_attributes_are_carried() {
        let placeholder = Attributes::new().with_flag(AttributeKey::Bold);
        let formatter = ParagraphFormatter::from(ListFormatter::new(ListStyle::Ordered).with_placeholder_attributes(placeholder.clone()));

        assert_eq!(formatter.placeholder_attributes(), Some(&placeholder));
        assert_eq!(ParagraphFormatter::from(DivFormatter::new()).placeholder_attributes(), None);
    }
}
