//! # List Formatter
//!
//! Applies and removes list membership on paragraphs.
//!
//! ## Insertion policy
//!
//! - No list yet, or increasing depth: the new list goes right after the
//!   last list item, so it nests inside it
//! - Otherwise the innermost list is replaced in place
//! - A plain `Paragraph` marker is dropped: list paragraphs are list items
//!
//! ## Continuation across paragraphs
//!
//! [`ListFormatter::apply_attributes_to`] reuses the list of the paragraph
//! just before the range when it has the same style, and pulls following
//! same-style lists into that identity. Adjacent lists of one style thus
//! merge into a single, continuously numbered list.

use super::application_range;
use crate::storage::{TextStorage, LINE_FEED, PARAGRAPH_SEPARATOR};
use crate::Attributes;
use folio_common::{HtmlRepresentation, TextRange};
use folio_style::{ListStyle, PropertyKind, TextList};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ListFormatter {
    style: ListStyle,
    increase_depth: bool,
    placeholder_attributes: Option<Attributes>,
}

impl ListFormatter {
    pub fn new(style: ListStyle) -> Self {
        Self {
            style,
            increase_depth: false,
            placeholder_attributes: None,
        }
    }

    /// Nest a new list inside the current one instead of replacing it
    pub fn increasing_depth(mut self) -> Self {
        self.increase_depth = true;
        self
    }

    pub fn with_placeholder_attributes(mut self, placeholder_attributes: Attributes) -> Self {
        self.placeholder_attributes = Some(placeholder_attributes);
        self
    }

    pub fn style(&self) -> ListStyle {
        self.style
    }

    pub fn increase_depth(&self) -> bool {
        self.increase_depth
    }

    pub fn placeholder_attributes(&self) -> Option<&Attributes> {
        self.placeholder_attributes.as_ref()
    }

    pub fn apply(&self, attributes: &Attributes, representation: Option<HtmlRepresentation>) -> Attributes {
        self.apply_list(attributes, TextList::from_representation(self.style, representation))
    }

    /// Apply a list whose identity the caller already picked
    pub fn apply_list(&self, attributes: &Attributes, list: TextList) -> Attributes {
        let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
        style.remove_property(PropertyKind::Paragraph);

        if style.lists().is_empty() || self.increase_depth {
            style.insert_property_after_last_of(list.into(), PropertyKind::ListItem);
        } else {
            style.replace_property(PropertyKind::List, list.into());
        }
        attributes.with_paragraph_style(style)
    }

    /// Apply to every paragraph touched by `range`, continuing neighbouring
    /// lists of the same style. Returns the range actually touched, extended
    /// over any following paragraphs whose list was continued.
    #[instrument(level = "debug", skip(self, text), fields(style = %self.style))]
    pub fn apply_attributes_to<T>(&self, text: &mut T, range: TextRange) -> TextRange
    where
        T: TextStorage + ?Sized,
    {
        let range_to_apply = application_range(range, text);
        text.replace_occurrences(
            &LINE_FEED.to_string(),
            &PARAGRAPH_SEPARATOR.to_string(),
            range_to_apply,
        );

        let list = text
            .paragraph_range_before(range_to_apply)
            .and_then(|previous| self.first_list_of_style(&text.attributes_at(previous.location)))
            .unwrap_or_else(|| TextList::new(self.style));

        let mut scanned = range_to_apply;
        while let Some(next) = text.paragraph_range_after(scanned) {
            if self.first_list_of_style(&text.attributes_at(next.location)).is_none() {
                break;
            }
            debug!(paragraph = %next, "continuing list into following paragraph");
            for (run, attributes) in text.attribute_runs(next) {
                if let Some(style) = attributes.paragraph_style() {
                    if let Some(index) = style.first_list_index() {
                        let mut style = style.clone();
                        style.properties[index] = list.clone().into();
                        text.add_attributes(&attributes.with_paragraph_style(style), run);
                    }
                }
            }
            scanned = next;
        }

        for (run, attributes) in text.attribute_runs(range_to_apply) {
            let applied = self.apply_list(&attributes, list.clone());
            text.add_attributes(&applied, run);
        }

        range_to_apply.union(&scanned)
    }

    pub fn remove(&self, attributes: &Attributes) -> Attributes {
        match attributes.paragraph_style() {
            Some(style) if self.innermost_matches(style.lists().last().copied()) => {
                let mut style = style.clone();
                style.remove_property(PropertyKind::ListItem);
                style.remove_property(PropertyKind::List);
                attributes.with_paragraph_style(style)
            }
            _ => attributes.clone(),
        }
    }

    /// True when the innermost list has this formatter's style
    pub fn present(&self, attributes: &Attributes) -> bool {
        self.innermost_matches(Self::lists(attributes).last())
    }

    /// Lists of a paragraph, outermost first
    pub fn lists(attributes: &Attributes) -> Vec<TextList> {
        attributes
            .paragraph_style()
            .map(|style| style.lists().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn lists_of_any_kind_present(attributes: &Attributes) -> bool {
        !Self::lists(attributes).is_empty()
    }

    fn innermost_matches(&self, list: Option<&TextList>) -> bool {
        list.is_some_and(|list| list.style() == self.style)
    }

    /// First (outermost) list of a paragraph, when it has this style
    fn first_list_of_style(&self, attributes: &Attributes) -> Option<TextList> {
        attributes
            .paragraph_style()
            .and_then(|style| style.lists().first().copied().cloned())
            .filter(|list| list.style() == self.style)
    }
}
