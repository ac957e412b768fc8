//! Session controller: one calculator wired to one display sink
//!
//! Input sources hand decoded [`Input`]s to [`Session::handle`]; after every
//! event the calculator's buffer is pushed to the sink. Events are processed
//! one at a time in arrival order.

use crate::calculator::{CalcError, Calculator};
use crate::display::{DisplaySink, MockDisplay};
use crate::input::{decode_sequence, DecodeError, Input};
use tracing::debug;

pub struct Session<S: DisplaySink> {
    calculator: Calculator,
    display: S,
}

impl<S: DisplaySink> Session<S> {
    /// Start a session; the sink immediately receives the initial buffer
    pub fn new(mut display: S) -> Self {
        let calculator = Calculator::new();
        display.show(calculator.buffer());
        Session {
            calculator,
            display,
        }
    }

    /// Process one input and refresh the display.
    ///
    /// A returned error has already been applied (the display shows the error
    /// marker); it is passed back so the caller can report it.
    pub fn handle(&mut self, input: Input) -> Result<(), CalcError> {
        let result = self.calculator.handle(input);
        debug!(
            input = ?input,
            buffer = self.calculator.buffer(),
            total = self.calculator.running_total(),
            pending = ?self.calculator.pending_operator(),
            "input processed"
        );
        self.display.show(self.calculator.buffer());
        result
    }

    /// Decode and process a key sequence such as `"3+4="`.
    ///
    /// The whole sequence is decoded before anything is processed, so a
    /// decoding error leaves the session untouched. Arithmetic errors do not
    /// stop processing; they are collected and returned in order.
    pub fn feed(&mut self, keys: &str) -> Result<Vec<CalcError>, DecodeError> {
        let inputs = decode_sequence(keys)?;
        Ok(inputs
            .into_iter()
            .filter_map(|input| self.handle(input).err())
            .collect())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn display(&self) -> &S {
        &self.display
    }

    pub fn into_display(self) -> S {
        self.display
    }
}

/// Run a key sequence through a fresh session and return everything shown
pub fn evaluate(keys: &str) -> Result<MockDisplay, DecodeError> {
    let mut session = Session::new(MockDisplay::new());
    session.feed(keys)?;
    Ok(session.into_display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_buffer_is_shown() {
        let session = Session::new(MockDisplay::new());
        assert_eq!(session.display().lines, vec!["0"]);
    }

    #[test]
    fn test_every_event_is_shown() {
        let mut session = Session::new(MockDisplay::new());
        session.feed("12+3=").unwrap();
        assert_eq!(
            session.display().lines,
            vec!["0", "1", "12", "0", "3", "15"]
        );
    }

    #[test]
    fn test_feed_collects_errors() {
        let mut session = Session::new(MockDisplay::new());
        let errors = session.feed("5/0=").unwrap();
        assert_eq!(errors, vec![CalcError::DivisionByZero]);
        assert_eq!(session.display().current(), Some("Error"));
    }

    #[test]
    fn test_decode_error_leaves_session_untouched() {
        let mut session = Session::new(MockDisplay::new());
        assert!(session.feed("1+x?").is_err());
        assert_eq!(session.display().lines.len(), 1);
        assert_eq!(session.calculator().buffer(), "0");
    }
}
