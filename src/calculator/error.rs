//! Error types for calculator operations.

use thiserror::Error;

/// Errors raised by calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Text could not be read as a calculator operand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a number: '{input}'")]
pub struct ParseNumberError {
    pub input: String,
}

/// Text did not name one of the four calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: '{name}'")]
pub struct UnknownOperationError {
    pub name: String,
}
