//! Symbol alphabet and the five-bit code word helpers shared by the encoder and decoder.

/// Number of symbols in one code word.
pub const CODE_WORD_LEN: usize = 5;

/// Number of letters in the plain-text alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// One of the two cipher symbols. `A` carries bit 0 and `B` carries bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Bit 0.
    A,
    /// Bit 1.
    B,
}

impl Symbol {
    /// Builds a symbol from the lowest bit of `bit`.
    #[must_use]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 { Self::A } else { Self::B }
    }

    /// Returns the bit this symbol stands for.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// Reads a ciphertext character, ignoring ASCII case.
    ///
    /// Only `A` maps to bit 0. Every other character, including ones outside
    /// the `{A, B}` alphabet, is read as `B`.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        if ch.to_ascii_uppercase() == 'A' {
            Self::A
        } else {
            Self::B
        }
    }

    /// Returns the upper-case character written for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

/// Renders an alphabet position as a big-endian five-symbol code word.
///
/// Only the low five bits of `index` are used.
#[must_use]
pub fn code_word(index: u8) -> [Symbol; CODE_WORD_LEN] {
    let mut word = [Symbol::A; CODE_WORD_LEN];
    for (position, symbol) in word.iter_mut().enumerate() {
        *symbol = Symbol::from_bit(index >> (CODE_WORD_LEN - 1 - position));
    }
    word
}

/// Interprets a five-character ciphertext window as a big-endian binary
/// number in `0..=31`. The first character is the most significant bit.
#[must_use]
pub fn code_word_value(window: &[char; CODE_WORD_LEN]) -> u8 {
    window
        .iter()
        .fold(0, |acc, &ch| (acc << 1) | Symbol::from_char(ch).bit())
}

/// Returns the zero-based alphabet position of an ASCII letter of either case.
#[must_use]
pub fn letter_index(ch: char) -> Option<u8> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    u8::try_from(ch.to_ascii_uppercase())
        .ok()
        .map(|byte| byte - b'A')
}

/// Returns the upper-case letter at `index`, or `None` past `Z`.
#[must_use]
pub fn letter_for(index: u8) -> Option<char> {
    (index < ALPHABET_LEN).then(|| char::from(b'A' + index))
}
