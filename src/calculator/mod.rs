//! Four-function calculator core
//!
//! A [`Calculator`] owns three pieces of state: the buffer text being entered
//! (or the last result), the running total of the current chain, and the
//! operator waiting for its right-hand operand. Operations run to completion
//! and never block; there is no precedence, so chains evaluate left to right.
//!
//! - [`engine`]: the state machine and its operations
//! - [`errors`]: [`CalcError`], reported after the error state is entered
//! - [`format`]: conversion between totals and buffer text

pub mod engine;
pub mod errors;
pub mod format;

pub use engine::{Calculator, Phase, ERROR_MARKER};
pub use errors::CalcError;
