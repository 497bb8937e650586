// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for bacon-core, exposing the Baconian encoder, decoder and validators.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Bacon Core Library
//!
//! This library provides the core functionality of the Baconian cipher: every
//! letter becomes a five-symbol code word over the alphabet `{A, B}`, and the
//! inverse mapping turns well-formed ciphertext back into upper-case text.
//!
//! All functions are pure. Reading input and printing results is left to the
//! caller (see the `bacon-cli` crate).

/// Encoding and decoding between plain text and ciphertext.
pub mod cipher;
/// Typed errors returned by validation and decoding.
pub mod error;
/// The `A`/`B` symbol alphabet and five-bit code word helpers.
pub mod symbols;
/// Spacing and character-set checks guarding the cipher operations.
pub mod validation;

pub use cipher::{decode, decrypt, encode, encrypt};
pub use error::{CipherError, DecodeError, DecodeErrorKind};
pub use validation::{has_valid_spacing, is_plain_alphabetic};
