use thiserror::Error;

/// Why a candidate shortcode could not be read. Offsets are byte offsets
/// into the processed text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShortcodeError {
    #[error("Shortcode [{tag}] starting at {offset} is never closed with `]`")]
    Unterminated { tag: String, offset: usize },

    #[error("Unexpected {found} at {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("Attribute `{name}` at {offset} has no value")]
    MissingValue { name: String, offset: usize },

    #[error("Invalid attribute text at {offset}")]
    InvalidToken { offset: usize },
}

pub type ShortcodeResult<T> = Result<T, ShortcodeError>;
