// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Handles the Baconian transformation between plain text and ciphertext.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the encoder, the decoder and the validated
//! `encrypt`/`decrypt` entry points built on top of them.

use log::{debug, trace};

use crate::error::{CipherError, DecodeError, DecodeErrorKind};
use crate::symbols::{
    CODE_WORD_LEN, Symbol, code_word, code_word_value, letter_for, letter_index,
};
use crate::validation::{validate_plaintext, validate_spacing};

/// Encodes plain text into ciphertext.
///
/// Each ASCII letter becomes its five-symbol code word, written without any
/// separator after the previous one. Every other character becomes a single
/// space. The input is expected to have passed
/// [`validate_plaintext`](crate::validation::validate_plaintext); use
/// [`encrypt`] to have that done for you.
#[must_use]
pub fn encode(plain_text: &str) -> String {
    let mut cipher_text = String::with_capacity(plain_text.len() * CODE_WORD_LEN);
    for ch in plain_text.chars() {
        if let Some(index) = letter_index(ch) {
            let word = code_word(index).map(Symbol::as_char);
            trace!("{ch:?} -> {}", String::from_iter(word));
            cipher_text.extend(word);
        } else {
            cipher_text.push(' ');
        }
    }
    debug!(
        "Encoded {} characters into {} ciphertext characters.",
        plain_text.chars().count(),
        cipher_text.len()
    );
    cipher_text
}

/// Decodes ciphertext back into upper-case plain text.
///
/// Code words are read as consecutive five-character windows. A single
/// space right after a window is copied to the output as a word separator.
/// Case is ignored and any symbol other than `A` counts as `B`.
///
/// Spacing is not validated here: an empty input decodes to an empty string.
/// Use [`decrypt`] to check spacing first.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a window is cut short by the end of the
/// input ([`DecodeErrorKind::Truncated`]), holds a space
/// ([`DecodeErrorKind::EmbeddedSeparator`]), or decodes past `Z`
/// ([`DecodeErrorKind::OutOfRange`]).
pub fn decode(cipher_text: &str) -> Result<String, DecodeError> {
    let chars: Vec<char> = cipher_text.chars().collect();
    let mut plain_text = String::with_capacity(chars.len() / CODE_WORD_LEN + 1);
    let mut position = 0;

    while position < chars.len() {
        let Some(window) = chars
            .get(position..position + CODE_WORD_LEN)
            .and_then(|window| <&[char; CODE_WORD_LEN]>::try_from(window).ok())
        else {
            debug!("Ciphertext ends with a truncated code word at {position}.");
            return Err(DecodeError::new(DecodeErrorKind::Truncated, position));
        };
        if window.contains(&' ') {
            debug!("Ciphertext has a space inside the code word at {position}.");
            return Err(DecodeError::new(
                DecodeErrorKind::EmbeddedSeparator,
                position,
            ));
        }

        let value = code_word_value(window);
        let letter = letter_for(value).ok_or_else(|| {
            debug!("Code word at {position} decodes to {value}, past the alphabet.");
            DecodeError::new(DecodeErrorKind::OutOfRange { value }, position)
        })?;
        trace!("{} -> {letter:?}", String::from_iter(window));
        plain_text.push(letter);

        position += CODE_WORD_LEN;
        if chars.get(position) == Some(&' ') {
            plain_text.push(' ');
            position += 1;
        }
    }

    debug!(
        "Decoded {} ciphertext characters into {} letters and separators.",
        chars.len(),
        plain_text.len()
    );
    Ok(plain_text)
}

/// Validates and encodes plain text.
///
/// # Errors
///
/// Returns [`CipherError::InvalidSpacing`] or [`CipherError::InvalidCharacter`]
/// if the input fails validation.
pub fn encrypt(plain_text: &str) -> Result<String, CipherError> {
    validate_plaintext(plain_text)?;
    Ok(encode(plain_text))
}

/// Validates the spacing of ciphertext and decodes it.
///
/// # Errors
///
/// Returns [`CipherError::InvalidSpacing`] if the spacing is wrong, or
/// [`CipherError::Decode`] if the code words are malformed.
pub fn decrypt(cipher_text: &str) -> Result<String, CipherError> {
    validate_spacing(cipher_text)?;
    Ok(decode(cipher_text)?)
}
