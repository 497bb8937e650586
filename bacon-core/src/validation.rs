//! Input checks run before encoding or decoding.
//!
//! The boolean validators are the primitive checks. The `validate_*`
//! wrappers turn them into [`CipherError`] values for callers that want to
//! report a reason.

use log::debug;

use crate::error::CipherError;

/// Returns `true` if `text` is non-empty, neither starts nor ends with a
/// space, and never has two spaces in a row.
#[must_use]
pub fn has_valid_spacing(text: &str) -> bool {
    !text.is_empty() && !text.starts_with(' ') && !text.ends_with(' ') && !text.contains("  ")
}

/// Returns `true` if every character of `text` is an ASCII letter or a space.
#[must_use]
pub fn is_plain_alphabetic(text: &str) -> bool {
    text.chars().all(is_plain_char)
}

/// Checks the spacing rules shared by plain text and ciphertext.
///
/// # Errors
///
/// Returns [`CipherError::InvalidSpacing`] if [`has_valid_spacing`] rejects `text`.
pub fn validate_spacing(text: &str) -> Result<(), CipherError> {
    if has_valid_spacing(text) {
        Ok(())
    } else {
        debug!("Rejected input with invalid spacing: {text:?}");
        Err(CipherError::InvalidSpacing)
    }
}

/// Checks that `text` can be encoded.
///
/// # Errors
///
/// Returns [`CipherError::InvalidSpacing`] first if the spacing is wrong,
/// then [`CipherError::InvalidCharacter`] for the first character that is
/// neither an ASCII letter nor a space.
pub fn validate_plaintext(text: &str) -> Result<(), CipherError> {
    validate_spacing(text)?;
    match text.chars().enumerate().find(|&(_, ch)| !is_plain_char(ch)) {
        Some((position, character)) => {
            debug!("Rejected plain text: unsupported character {character:?} at {position}");
            Err(CipherError::InvalidCharacter {
                character,
                position,
            })
        }
        None => Ok(()),
    }
}

const fn is_plain_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == ' '
}
