use folio_style::ParagraphStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Keys of an attribute mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    ParagraphStyle,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValue {
    ParagraphStyle(Arc<ParagraphStyle>),
    Flag(bool),
    Text(String),
}

/// Attribute mapping for a run of characters.
///
/// The paragraph style sits behind an [`Arc`]: maps share styles, and a
/// formatter replaces the `Arc` rather than writing through it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes(BTreeMap<AttributeKey, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.0.get(&key)
    }

    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Option<AttributeValue> {
        self.0.insert(key, value)
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.0.remove(&key)
    }

    pub fn with(mut self, key: AttributeKey, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_flag(self, key: AttributeKey) -> Self {
        self.with(key, AttributeValue::Flag(true))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.0.iter()
    }

    /// True for a `Flag(true)` value
    pub fn flag(&self, key: AttributeKey) -> bool {
        matches!(self.get(key), Some(AttributeValue::Flag(true)))
    }

    pub fn text(&self, key: AttributeKey) -> Option<&str> {
        match self.get(key) {
            Some(AttributeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle) {
            Some(AttributeValue::ParagraphStyle(style)) => Some(style),
            _ => None,
        }
    }

    /// A copy of this mapping holding `style` as its paragraph style
    pub fn with_paragraph_style(&self, style: ParagraphStyle) -> Self {
        self.clone()
            .with(AttributeKey::ParagraphStyle, AttributeValue::ParagraphStyle(Arc::new(style)))
    }

    /// Copy every entry of `other` over this mapping
    pub fn merge(&mut self, other: &Attributes) {
        self.0
            .extend(other.0.iter().map(|(key, value)| (*key, value.clone())));
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::ParagraphProperty;

    #[test]
    fn test_with_paragraph_style_leaves_original() {
        let original = Attributes::new().with_flag(AttributeKey::Bold);
        let styled = original.with_paragraph_style(ParagraphStyle::with_properties(vec![
            ParagraphProperty::div(None),
        ]));

        assert!(original.paragraph_style().is_none());
        assert_eq!(styled.paragraph_style().map(|style| style.divs().len()), Some(1));
        assert!(styled.flag(AttributeKey::Bold));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Attributes::new()
            .with_flag(AttributeKey::Italic)
            .with(AttributeKey::Link, AttributeValue::Text("a.html".into()));
        base.merge(&Attributes::new().with(AttributeKey::Link, AttributeValue::Text("b.html".into())));

        assert_eq!(base.text(AttributeKey::Link), Some("b.html"));
        assert!(base.flag(AttributeKey::Italic));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_attributes_survive_json() {
        let attributes = Attributes::new()
            .with_flag(AttributeKey::Underline)
            .with_paragraph_style(ParagraphStyle::with_properties(vec![ParagraphProperty::blockquote(None)]));

        let json = serde_json::to_string(&attributes).unwrap();
        let decoded: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, attributes);
    }
}
