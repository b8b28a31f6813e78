use thiserror::Error;

/// Errors shared by the folio crates at their recoverable edges
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommonError {
    #[error("Invalid value for attribute `{name}`: {value:?}")]
    InvalidAttribute { name: String, value: String },
}

impl CommonError {
    pub fn invalid_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}
