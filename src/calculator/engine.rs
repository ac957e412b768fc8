//! The calculator state machine

use super::errors::CalcError;
use super::format::{format_number, is_numeral};
use crate::input::{Digit, Input, Operator, Symbol};
use tracing::{debug, warn};

/// Text shown in the buffer after a failed calculation
pub const ERROR_MARKER: &str = "Error";

const EMPTY_BUFFER: &str = "0";

/// Coarse view of where the calculator is in a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator pending; the buffer holds the first operand (or a result)
    EnteringFirst,
    /// An operator is waiting for the next operand
    OperatorPending(Operator),
    /// The buffer shows [`ERROR_MARKER`]
    Error,
}

/// Buffer, running total and pending operator of one calculator.
///
/// Evaluation is strictly left to right: pressing an operator folds the
/// entered operand into the running total using the *previously* pending
/// operator, so `3 + 4 × 5 =` yields `35`.
///
/// Invariants:
/// - the buffer is never empty; it is `"0"`, a finite numeral, or
///   [`ERROR_MARKER`]
/// - the running total is `0` whenever no operator is pending
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    buffer: String,
    running_total: f64,
    pending: Option<Operator>,
    error: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            buffer: String::from(EMPTY_BUFFER),
            running_total: 0.0,
            pending: None,
            error: false,
        }
    }

    /// Current buffer text
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn phase(&self) -> Phase {
        match (self.error, self.pending) {
            (true, _) => Phase::Error,
            (false, Some(op)) => Phase::OperatorPending(op),
            (false, None) => Phase::EnteringFirst,
        }
    }

    /// Dispatch a decoded input to the matching operation
    pub fn handle(&mut self, input: Input) -> Result<(), CalcError> {
        match input {
            Input::Digit(d) => {
                self.append_digit(d);
                Ok(())
            }
            Input::Symbol(Symbol::Clear) => {
                self.clear();
                Ok(())
            }
            Input::Symbol(Symbol::Backspace) => {
                self.backspace();
                Ok(())
            }
            Input::Symbol(Symbol::Equals) => self.equals(),
            Input::Symbol(Symbol::Op(op)) => self.apply_operator(op),
        }
    }

    /// Append a digit to the buffer. A lone `"0"` is replaced, and so is the
    /// error marker (which also leaves the error state).
    pub fn append_digit(&mut self, digit: Digit) {
        if self.error || self.buffer == EMPTY_BUFFER {
            self.error = false;
            self.buffer.clear();
        }
        self.buffer.push(digit.as_char());
    }

    /// Make `op` the pending operator, first folding the entered operand into
    /// the running total with the previously pending one.
    ///
    /// Ignored when nothing has been entered (buffer `"0"`) or while the
    /// error marker is shown.
    pub fn apply_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.error || self.buffer == EMPTY_BUFFER {
            debug!(operator = ?op, "operator ignored, no operand entered");
            return Ok(());
        }

        let operand = self.operand()?;
        match self.pending {
            None => self.running_total = operand,
            Some(previous) => self.flush(previous, operand)?,
        }

        self.pending = Some(op);
        self.buffer = String::from(EMPTY_BUFFER);
        Ok(())
    }

    /// Finish the chain: fold the buffer into the running total and show the
    /// result. No-op when no operator is pending.
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.pending else {
            return Ok(());
        };

        let operand = self.operand()?;
        self.flush(op, operand)?;

        self.buffer = format_number(self.running_total);
        self.running_total = 0.0;
        self.pending = None;
        Ok(())
    }

    /// Reset every field to its initial value
    pub fn clear(&mut self) {
        *self = Calculator::new();
    }

    /// Remove the last character of the buffer, falling back to `"0"`
    pub fn backspace(&mut self) {
        if self.error || self.buffer.len() <= 1 {
            self.error = false;
            self.buffer = String::from(EMPTY_BUFFER);
            return;
        }

        self.buffer.pop();
        // "-3" must not become "-"
        if !is_numeral(&self.buffer) {
            self.buffer = String::from(EMPTY_BUFFER);
        }
    }

    /// Combine the running total with `operand` using `op`
    fn flush(&mut self, op: Operator, operand: f64) -> Result<(), CalcError> {
        let result = match op {
            Operator::Add => self.running_total + operand,
            Operator::Subtract => self.running_total - operand,
            Operator::Multiply => self.running_total * operand,
            Operator::Divide => {
                if operand == 0.0 {
                    return Err(self.fail(CalcError::DivisionByZero));
                }
                self.running_total / operand
            }
        };

        if !result.is_finite() {
            return Err(self.fail(CalcError::Overflow));
        }

        self.running_total = result;
        Ok(())
    }

    /// Read the buffer as a number
    fn operand(&mut self) -> Result<f64, CalcError> {
        match self.buffer.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(self.fail(CalcError::Overflow)),
            Err(_) => {
                let text = self.buffer.clone();
                Err(self.fail(CalcError::InvalidOperand(text)))
            }
        }
    }

    /// Enter the error state and end the current chain
    fn fail(&mut self, error: CalcError) -> CalcError {
        warn!(%error, total = self.running_total, "calculation failed");
        self.buffer = String::from(ERROR_MARKER);
        self.running_total = 0.0;
        self.pending = None;
        self.error = true;
        error
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
