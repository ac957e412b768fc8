//! Error types for the calculator state machine
//!
//! Errors are returned *after* the state transition has been applied: by the
//! time a caller sees a [`CalcError`], the calculator already shows the error
//! marker and its chain has been reset. The value is for reporting only.

use thiserror::Error;

/// Arithmetic failures detected while folding an operand into the total
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divisor was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result (or an entered operand) does not fit in a finite `f64`
    #[error("Result out of range")]
    Overflow,

    /// Buffer text could not be read back as a number
    #[error("Cannot read '{0}' as a number")]
    InvalidOperand(String),
}
