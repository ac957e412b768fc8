//! Keyboard aliases for the keypad buttons

use super::{Digit, Input, Operator, Symbol};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Decode a key press into a calculator input.
///
/// Returns `None` for keys the calculator does not handle (arrows, `q`, and
/// anything pressed with Control or Alt, so that Ctrl-C stays free for the
/// application).
pub fn decode_key(key: KeyEvent) -> Option<Input> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let symbol = match key.code {
        KeyCode::Char(c) => {
            if let Some(d) = Digit::from_char(c) {
                return Some(Input::Digit(d));
            }
            match c {
                'c' | 'C' => Symbol::Clear,
                '=' => Symbol::Equals,
                '+' => Symbol::Op(Operator::Add),
                '-' => Symbol::Op(Operator::Subtract),
                '*' => Symbol::Op(Operator::Multiply),
                '/' => Symbol::Op(Operator::Divide),
                _ => return None,
            }
        }
        KeyCode::Esc | KeyCode::Delete => Symbol::Clear,
        KeyCode::Backspace => Symbol::Backspace,
        KeyCode::Enter => Symbol::Equals,
        _ => return None,
    };

    Some(Input::Symbol(symbol))
}
