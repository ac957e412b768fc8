//! Input events consumed by the calculator
//!
//! Everything the core reacts to is one of the closed enums defined here.
//! Presentation text (button glyphs, key codes) is decoded into an [`Input`]
//! exactly once, at the boundary, by one of the adapters:
//!
//! - [`keys`]: crossterm key presses (keyboard aliases)
//! - [`labels`]: on-screen button labels and plain characters (batch mode)

pub mod keys;
pub mod labels;

use std::fmt;
use thiserror::Error;

pub use keys::decode_key;
pub use labels::{decode_char, decode_label, decode_sequence};

/// A single decimal digit `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown on the keypad and in the display pane
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

/// Non-digit keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Clear,
    Backspace,
    Equals,
    Op(Operator),
}

impl Symbol {
    pub fn label(self) -> &'static str {
        match self {
            Symbol::Clear => "C",
            Symbol::Backspace => "←",
            Symbol::Equals => "=",
            Symbol::Op(op) => op.glyph(),
        }
    }
}

/// One decoded input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Symbol(Symbol),
}

impl Input {
    pub const ADD: Input = Input::Symbol(Symbol::Op(Operator::Add));
    pub const SUBTRACT: Input = Input::Symbol(Symbol::Op(Operator::Subtract));
    pub const MULTIPLY: Input = Input::Symbol(Symbol::Op(Operator::Multiply));
    pub const DIVIDE: Input = Input::Symbol(Symbol::Op(Operator::Divide));
    pub const EQUALS: Input = Input::Symbol(Symbol::Equals);
    pub const CLEAR: Input = Input::Symbol(Symbol::Clear);
    pub const BACKSPACE: Input = Input::Symbol(Symbol::Backspace);

    /// Digit input; `None` for values above 9
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Input::Digit)
    }

    /// Label of the keypad button that produces this input
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Symbol(s) => s.label().to_string(),
        }
    }
}

/// Failure to decode raw text into an [`Input`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unrecognized key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },

    #[error("unrecognized button label '{0}'")]
    UnknownLabel(String),
}
