//! Calculator module for four-function arithmetic with a history log.
//!
//! This module provides:
//! - A numeric operand type that keeps integers exact
//! - The four arithmetic operations with type promotion
//! - An append-only log of every successful operation

mod error;
mod history;
mod number;

pub use error::{CalcError, ParseNumberError, UnknownOperationError};
pub use history::{Calculator, Operation};
pub use number::Number;
