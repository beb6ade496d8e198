//! The calculator and its operation history.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use super::error::{CalcError, UnknownOperationError};
use super::number::Number;

/// One of the four arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Get the operator character written in history lines.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Get the lowercase operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperationError;

    /// Accepts names in any case or the operator symbol itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "-" => Ok(Self::Subtract),
            "multiply" | "*" => Ok(Self::Multiply),
            "divide" | "/" => Ok(Self::Divide),
            _ => Err(UnknownOperationError {
                name: s.to_string(),
            }),
        }
    }
}

/// A calculator that records every successful operation.
///
/// History entries have the form `"<a> <op> <b> = <result>"` and are only
/// ever appended, or dropped all together by [`Calculator::clear_history`].
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a + b;
        self.record(a, Operation::Add, b, result);
        result
    }

    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a - b;
        self.record(a, Operation::Subtract, b, result);
        result
    }

    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a * b;
        self.record(a, Operation::Multiply, b, result);
        result
    }

    /// True division: the quotient is a float even for two integers.
    ///
    /// Fails with [`CalcError::DivisionByZero`] when `b` is zero, in which
    /// case nothing is added to the history.
    pub fn divide(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Result<f64, CalcError> {
        let (a, b) = (a.into(), b.into());
        if b.is_zero() {
            tracing::warn!("Refusing to divide {} by zero", a);
            return Err(CalcError::DivisionByZero);
        }
        let result = a.as_f64() / b.as_f64();
        self.record(a, Operation::Divide, b, Number::Float(result));
        Ok(result)
    }

    /// Run `op` on the operands, returning the result as a [`Number`].
    pub fn apply(
        &mut self,
        op: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<Number, CalcError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b).map(Number::Float),
        }
    }

    /// Get a copy of the history, oldest entry first.
    ///
    /// The returned vector is owned by the caller; changing it does not
    /// touch the calculator's log.
    pub fn get_history(&self) -> Vec<String> {
        self.history.clone()
    }

    /// Empty the history.
    pub fn clear_history(&mut self) {
        tracing::debug!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }

    /// Number of entries in the history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn record(&mut self, a: Number, op: Operation, b: Number, result: Number) {
        let line = format!("{} {} {} = {}", a, op.symbol(), b, result);
        tracing::debug!("{}", line);
        self.history.push(line);
    }
}
