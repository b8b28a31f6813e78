use crate::Attributes;
use folio_common::HtmlRepresentation;
use folio_style::{ParagraphProperty, PropertyKind, StyleResult};

/// Turns paragraphs into headers of one level. A paragraph holds at most
/// one header; applying a different level replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFormatter {
    level: u8,
    placeholder_attributes: Option<Attributes>,
}

impl HeaderFormatter {
    /// Fails for levels outside `1..=6`
    pub fn new(level: u8) -> StyleResult<Self> {
        ParagraphProperty::header(level, None)?;
        Ok(Self {
            level,
            placeholder_attributes: None,
        })
    }

    pub fn with_placeholder_attributes(mut self, placeholder_attributes: Attributes) -> Self {
        self.placeholder_attributes = Some(placeholder_attributes);
        self
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn placeholder_attributes(&self) -> Option<&Attributes> {
        self.placeholder_attributes.as_ref()
    }

    pub fn apply(&self, attributes: &Attributes, representation: Option<HtmlRepresentation>) -> Attributes {
        let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
        style.remove_property(PropertyKind::Paragraph);
        style.replace_property(
            PropertyKind::Header,
            ParagraphProperty::Header {
                level: self.level,
                representation,
            },
        );
        attributes.with_paragraph_style(style)
    }

    pub fn remove(&self, attributes: &Attributes) -> Attributes {
        if !self.present(attributes) {
            return attributes.clone();
        }
        let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
        style.remove_property(PropertyKind::Header);
        attributes.with_paragraph_style(style)
    }

    pub fn present(&self, attributes: &Attributes) -> bool {
        attributes
            .paragraph_style()
            .and_then(|style| style.header_level())
            == Some(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::ParagraphStyle;

    #[test]
    fn test_invalid_level() {
        assert!(HeaderFormatter::new(0).is_err());
        assert!(HeaderFormatter::new(9).is_err());
    }

    #[test]
    fn test_apply_replaces_existing_header() {
        let h1 = HeaderFormatter::new(1).unwrap();
        let h3 = HeaderFormatter::new(3).unwrap();
        let attributes = Attributes::new().with_paragraph_style(ParagraphStyle::with_properties(vec![
            ParagraphProperty::paragraph(None),
        ]));

        let first = h1.apply(&attributes, None);
        let second = h3.apply(&first, None);
        let style = second.paragraph_style().unwrap();

        assert_eq!(style.headers().len(), 1);
        assert!(!style.contains(PropertyKind::Paragraph));
        assert!(h3.present(&second));
        assert!(!h1.present(&second));
    }

    #[test]
    fn test_remove_only_matching_level() {
        let h2 = HeaderFormatter::new(2).unwrap();
        let h4 = HeaderFormatter::new(4).unwrap();
        let applied = h2.apply(&Attributes::new(), None);

        assert_eq!(h4.remove(&applied), applied);
        assert!(!h2.present(&h2.remove(&applied)));
    }
}
