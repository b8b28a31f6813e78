use crate::{ParagraphProperty, PropertyKind, TextList};
use serde::{Deserialize, Serialize};

/// Paragraph-level style: an ordered property sequence, outermost first,
/// plus spacing.
///
/// Duplicates are allowed. Several `List` entries encode nested lists, the
/// last one being the innermost. Kind-based edits (`replace_property`,
/// `remove_property`) act on the last, innermost, match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(default)]
    pub properties: Vec<ParagraphProperty>,

    #[serde(default)]
    pub spacing_before: f32,

    #[serde(default)]
    pub spacing_after: f32,

    #[serde(default)]
    pub head_indent: f32,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: Vec<ParagraphProperty>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    pub fn append_property(&mut self, property: ParagraphProperty) {
        self.properties.push(property);
    }

    /// Insert right after the last property of `kind`, or append when there
    /// is none.
    pub fn insert_property_after_last_of(&mut self, property: ParagraphProperty, kind: PropertyKind) {
        match self.last_index_of(kind) {
            Some(index) => self.properties.insert(index + 1, property),
            None => self.properties.push(property),
        }
    }

    /// Replace the last property of `kind`, or append when there is none.
    pub fn replace_property(&mut self, kind: PropertyKind, property: ParagraphProperty) {
        match self.last_index_of(kind) {
            Some(index) => self.properties[index] = property,
            None => self.properties.push(property),
        }
    }

    /// Remove the last property of `kind`, returning it.
    pub fn remove_property(&mut self, kind: PropertyKind) -> Option<ParagraphProperty> {
        let index = self.last_index_of(kind)?;
        Some(self.properties.remove(index))
    }

    /// Remove every property of `kind`, returning how many went.
    pub fn remove_all(&mut self, kind: PropertyKind) -> usize {
        let before = self.properties.len();
        self.properties.retain(|property| property.kind() != kind);
        before - self.properties.len()
    }

    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.properties.iter().any(|property| property.kind() == kind)
    }

    pub fn last_of(&self, kind: PropertyKind) -> Option<&ParagraphProperty> {
        self.properties.iter().rev().find(|property| property.kind() == kind)
    }

    pub fn of_kind(&self, kind: PropertyKind) -> impl Iterator<Item = &ParagraphProperty> {
        self.properties
            .iter()
            .filter(move |property| property.kind() == kind)
    }

    /// Lists, outermost first
    pub fn lists(&self) -> Vec<&TextList> {
        self.properties
            .iter()
            .filter_map(ParagraphProperty::as_list)
            .collect()
    }

    /// Index of the first list property, used when a list identity is
    /// propagated across paragraphs.
    pub fn first_list_index(&self) -> Option<usize> {
        self.properties
            .iter()
            .position(|property| property.kind() == PropertyKind::List)
    }

    pub fn list_depth(&self) -> usize {
        self.of_kind(PropertyKind::List).count()
    }

    pub fn divs(&self) -> Vec<&ParagraphProperty> {
        self.of_kind(PropertyKind::Div).collect()
    }

    pub fn blockquotes(&self) -> Vec<&ParagraphProperty> {
        self.of_kind(PropertyKind::Blockquote).collect()
    }

    pub fn headers(&self) -> Vec<&ParagraphProperty> {
        self.of_kind(PropertyKind::Header).collect()
    }

    /// Level of the innermost header, if any
    pub fn header_level(&self) -> Option<u8> {
        self.last_of(PropertyKind::Header)
            .and_then(ParagraphProperty::header_level)
    }

    fn last_index_of(&self, kind: PropertyKind) -> Option<usize> {
        self.properties
            .iter()
            .rposition(|property| property.kind() == kind)
    }
}
