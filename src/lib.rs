//! # Introduction
//!
//! calctty is a four-function calculator for the terminal. Digits and
//! operators arrive as key presses or keypad clicks, are decoded once into
//! typed inputs, and drive a small state machine that evaluates chains
//! strictly left to right (no precedence).
//!
//! ## Event pipeline
//!
//! ```text
//! Key press / click → Input → Session → Calculator → DisplaySink → TUI
//! ```
//!
//! 1. [`input`] — closed enums for digits, operators and commands, and the
//!    adapters that decode keys, button labels and characters into them.
//! 2. [`session`] — one controller per calculator; dispatches each input and
//!    pushes the resulting buffer to a display sink.
//! 3. [`calculator`] — buffer, running total and pending operator, with the
//!    append/operator/equals/clear/backspace operations.
//! 4. [`display`] — the write-only [`display::DisplaySink`] trait and a
//!    recording [`display::MockDisplay`].
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`logging`] — tracing subscriber setup for the binary.
//!
//! ## Example
//!
//! ```
//! use calctty::session::evaluate;
//!
//! let display = evaluate("7 × 6 =").unwrap();
//! assert_eq!(display.current(), Some("42"));
//! ```

pub mod calculator;
pub mod display;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;
