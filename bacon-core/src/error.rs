//! Error types for the cipher operations.

use serde::Serialize;
use thiserror::Error;

/// The reason a ciphertext could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeErrorKind {
    /// Fewer than five characters were left for the final code word.
    #[error("truncated code word")]
    Truncated,
    /// A word-separating space appeared inside a code word.
    #[error("space inside a code word")]
    EmbeddedSeparator,
    /// The code word decodes to a value past `Z` (26 to 31).
    #[error("code word value {value} is past the end of the alphabet")]
    OutOfRange {
        /// The decoded five-bit value.
        value: u8,
    },
}

/// A structural failure while decoding ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("{kind} at character {position}")]
pub struct DecodeError {
    /// What went wrong.
    #[serde(flatten)]
    pub kind: DecodeErrorKind,
    /// Character offset where the offending code word starts.
    pub position: usize,
}

impl DecodeError {
    /// Creates a decode error for the code word starting at `position`.
    #[must_use]
    pub const fn new(kind: DecodeErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Errors surfaced to callers of [`crate::encrypt`] and [`crate::decrypt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CipherError {
    /// The input is empty, starts or ends with a space, or has a run of spaces.
    #[error("input must be non-empty, with single spaces between words and none at either end")]
    InvalidSpacing,
    /// The plain text holds something other than ASCII letters and spaces.
    #[error("unsupported character '{character}' at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Its character offset in the input.
        position: usize,
    },
    /// The ciphertext is malformed.
    #[error("malformed ciphertext: {0}")]
    Decode(#[from] DecodeError),
}
