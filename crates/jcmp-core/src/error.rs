use thiserror::Error;

/// Errors produced when parsing a rendered path back into segments.
///
/// Positions are byte offsets into the input string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty key segment at byte {at}")]
    EmptyKey { at: usize },

    #[error("unterminated '[' at byte {at}")]
    UnclosedBracket { at: usize },

    #[error("invalid array index {index:?} at byte {at}")]
    InvalidIndex { at: usize, index: String },

    #[error("unexpected character {ch:?} at byte {at}")]
    UnexpectedCharacter { at: usize, ch: char },
}
