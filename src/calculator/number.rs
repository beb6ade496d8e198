//! Numeric operands for the calculator.
//!
//! Integers and floats are kept apart so that results and history lines
//! can tell whether a value was integral to begin with.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use super::error::ParseNumberError;

/// A calculator operand or result.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// An exact integer.
    Int(i64),
    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// The value as a float, whatever the variant.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Check if this value carries an integer type.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Check if this value is numerically zero (`0`, `0.0` or `-0.0`).
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Apply a binary operation with numeric promotion.
    ///
    /// Two integers stay exact unless the checked operation overflows, in
    /// which case the float result is returned instead.
    fn combine(
        self,
        rhs: Self,
        exact: fn(i64, i64) -> Option<i64>,
        inexact: fn(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match exact(a, b) {
                Some(value) => Self::Int(value),
                None => Self::Float(inexact(a as f64, b as f64)),
            },
            (a, b) => Self::Float(inexact(a.as_f64(), b.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Number::from(*other)
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        text.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseNumberError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => f.write_str(&render_float(v)),
        }
    }
}

/// Render a float the way a history line shows it.
///
/// Shortest round-trip digits, always with a fractional part, switching to
/// exponent notation below `1e-4` and from `1e16` up.
fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let s = if value.is_sign_positive() { "inf" } else { "-inf" };
        return s.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let shortest = format!("{:e}", value);
        if let Some((mantissa, exponent)) = shortest.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
        return shortest;
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}
