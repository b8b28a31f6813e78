use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to decode paragraph style: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode paragraph style: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Header level {0} is outside 1..=6")]
    InvalidHeaderLevel(u8),
}

pub type StyleResult<T> = Result<T, StyleError>;
