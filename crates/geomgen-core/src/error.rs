//! Error types for shader generation

use thiserror::Error;

/// Failure to read a segment count from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("number of segments is empty")]
    Empty,

    #[error("invalid number of segments: {0:?} is not a base-10 integer")]
    InvalidDigit(String),

    #[error("invalid number of segments: {0:?} is not valid UTF-8")]
    NotUnicode(String),
}

/// Malformed or unsupported placeholders in a shader template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown template placeholder: {0}")]
    UnknownPlaceholder(String),

    #[error("unterminated template placeholder at byte {0}")]
    Unterminated(usize),
}

/// Any failure along the parse, render path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
