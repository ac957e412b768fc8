//! On-screen button labels and plain-text key sequences

use super::{DecodeError, Digit, Input, Operator, Symbol};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

fn label_table() -> &'static FxHashMap<&'static str, Input> {
    static TABLE: OnceLock<FxHashMap<&'static str, Input>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = FxHashMap::default();
        for (label, digit) in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]
            .into_iter()
            .zip(0u8..)
        {
            if let Some(input) = Input::digit(digit) {
                table.insert(label, input);
            }
        }
        for symbol in [
            Symbol::Clear,
            Symbol::Backspace,
            Symbol::Equals,
            Symbol::Op(Operator::Add),
            Symbol::Op(Operator::Subtract),
            Symbol::Op(Operator::Multiply),
            Symbol::Op(Operator::Divide),
        ] {
            table.insert(symbol.label(), Input::Symbol(symbol));
        }
        table
    })
}

/// Decode the label of a clicked keypad button
pub fn decode_label(label: &str) -> Result<Input, DecodeError> {
    label_table()
        .get(label.trim())
        .copied()
        .ok_or_else(|| DecodeError::UnknownLabel(label.to_string()))
}

/// Decode one character of a batch key sequence.
///
/// Accepts the ASCII keyboard aliases, the keypad glyphs, and `<` as a
/// typeable stand-in for backspace.
pub fn decode_char(c: char) -> Option<Input> {
    if let Some(d) = Digit::from_char(c) {
        return Some(Input::Digit(d));
    }
    let symbol = match c {
        'c' | 'C' => Symbol::Clear,
        '<' | '←' => Symbol::Backspace,
        '=' => Symbol::Equals,
        '+' => Symbol::Op(Operator::Add),
        '-' | '−' => Symbol::Op(Operator::Subtract),
        '*' | '×' | 'x' => Symbol::Op(Operator::Multiply),
        '/' | '÷' => Symbol::Op(Operator::Divide),
        _ => return None,
    };
    Some(Input::Symbol(symbol))
}

/// Decode a whole key sequence such as `"3 + 4 + 5 ="`. Whitespace is skipped.
pub fn decode_sequence(keys: &str) -> Result<Vec<Input>, DecodeError> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| decode_char(key).ok_or(DecodeError::UnknownKey { key, position }))
        .collect()
}
