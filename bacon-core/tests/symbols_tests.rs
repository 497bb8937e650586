#![allow(missing_docs)]
use bacon_core::symbols::{Symbol, code_word, code_word_value, letter_for, letter_index};

#[test]
fn test_code_word_is_big_endian() {
    use Symbol::{A, B};
    assert_eq!(code_word(0), [A, A, A, A, A]);
    assert_eq!(code_word(1), [A, A, A, A, B]);
    assert_eq!(code_word(16), [B, A, A, A, A]);
    assert_eq!(code_word(25), [B, B, A, A, B]);
}

#[test]
fn test_code_word_value() {
    assert_eq!(code_word_value(&['A', 'A', 'A', 'A', 'A']), 0);
    assert_eq!(code_word_value(&['B', 'A', 'B', 'B', 'B']), 23);
    assert_eq!(code_word_value(&['b', 'b', 'b', 'b', 'b']), 31);
    assert_eq!(code_word_value(&['a', '?', 'a', 'a', 'a']), 8);
}

#[test]
fn test_symbol_from_char_is_lenient() {
    assert_eq!(Symbol::from_char('A'), Symbol::A);
    assert_eq!(Symbol::from_char('a'), Symbol::A);
    assert_eq!(Symbol::from_char('B'), Symbol::B);
    assert_eq!(Symbol::from_char('z'), Symbol::B);
    assert_eq!(Symbol::from_char('0'), Symbol::B);
}

#[test]
fn test_letter_mapping() {
    assert_eq!(letter_index('a'), Some(0));
    assert_eq!(letter_index('Z'), Some(25));
    assert_eq!(letter_index(' '), None);
    assert_eq!(letter_index('\u{e9}'), None);
    assert_eq!(letter_for(0), Some('A'));
    assert_eq!(letter_for(25), Some('Z'));
    assert_eq!(letter_for(26), None);
}

#[test]
fn test_code_word_matches_code_word_value() {
    for index in 0..26u8 {
        let chars = code_word(index).map(Symbol::as_char);
        assert_eq!(code_word_value(&chars), index);
    }
}
