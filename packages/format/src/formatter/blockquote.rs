use crate::Attributes;
use folio_common::HtmlRepresentation;
use folio_style::{ParagraphProperty, PropertyKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockquoteFormatter {
    placeholder_attributes: Option<Attributes>,
}

impl BlockquoteFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder_attributes(placeholder_attributes: Attributes) -> Self {
        Self {
            placeholder_attributes: Some(placeholder_attributes),
        }
    }

    pub fn placeholder_attributes(&self) -> Option<&Attributes> {
        self.placeholder_attributes.as_ref()
    }

    pub fn apply(&self, attributes: &Attributes, representation: Option<HtmlRepresentation>) -> Attributes {
        let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
        style.append_property(ParagraphProperty::blockquote(representation));
        attributes.with_paragraph_style(style)
    }

    pub fn remove(&self, attributes: &Attributes) -> Attributes {
        match attributes.paragraph_style() {
            Some(style) if style.contains(PropertyKind::Blockquote) => {
                let mut style = style.clone();
                style.remove_property(PropertyKind::Blockquote);
                attributes.with_paragraph_style(style)
            }
            _ => attributes.clone(),
        }
    }

    pub fn present(&self, attributes: &Attributes) -> bool {
        attributes
            .paragraph_style()
            .is_some_and(|style| style.contains(PropertyKind::Blockquote))
    }
}
