//! Markup provenance carried by nodes and paragraph properties.
//!
//! The core never interprets a representation beyond reading a few named
//! attributes; it keeps the value so a serializer can round-trip the
//! original markup.

use crate::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single markup attribute. A `None` value is a bare attribute such as
/// `<ol reversed>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An element as it appeared in (or will be written to) markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRepresentation {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ElementRepresentation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// First attribute with the given name (ASCII case-insensitive, as in HTML).
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
    }

    /// String value of an attribute, `None` for missing or bare attributes.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(|attribute| attribute.value.as_deref())
    }

    /// Parse an attribute's value. Missing or bare attributes yield `Ok(None)`.
    pub fn parse_attribute<T: FromStr>(&self, name: &str) -> CommonResult<Option<T>> {
        match self.attribute_value(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| CommonError::invalid_attribute(name, raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RepresentationKind {
    Element(ElementRepresentation),
    Attribute(Attribute),
    InlineCss { css: String },
}

/// Provenance value linking an in-memory property or node to markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlRepresentation {
    pub kind: RepresentationKind,
}

impl HtmlRepresentation {
    pub fn element(element: ElementRepresentation) -> Self {
        Self {
            kind: RepresentationKind::Element(element),
        }
    }

    pub fn attribute(attribute: Attribute) -> Self {
        Self {
            kind: RepresentationKind::Attribute(attribute),
        }
    }

    pub fn inline_css(css: impl Into<String>) -> Self {
        Self {
            kind: RepresentationKind::InlineCss { css: css.into() },
        }
    }

    pub fn as_element(&self) -> Option<&ElementRepresentation> {
        match &self.kind {
            RepresentationKind::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<ElementRepresentation> for HtmlRepresentation {
    fn from(element: ElementRepresentation) -> Self {
        Self::element(element)
    }
}
