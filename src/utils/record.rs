//! Operation symbols and calculation records.

use serde::Serialize;

use super::numeric::{DEFAULT_DECIMAL_PLACES, format_number};
use crate::calculator::Number;

/// Operation names and their symbols. Lookups are case-insensitive.
const OPERATION_SYMBOLS: &[(&str, &str)] = &[
    ("add", "+"),
    ("subtract", "-"),
    ("multiply", "*"),
    ("divide", "/"),
    ("power", "^"),
    ("mod", "%"),
];

/// Get the symbol for an operation name, or `"?"` if the name is unknown.
pub fn get_operation_symbol(operation: &str) -> &'static str {
    let name = operation.to_lowercase();
    OPERATION_SYMBOLS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("?")
}

/// A summary of one computation, built for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationRecord {
    /// The first operand.
    pub operand1: Number,
    /// The second operand.
    pub operand2: Number,
    /// The operation name as given by the caller.
    pub operation: String,
    /// The symbol looked up from the operation name.
    pub symbol: &'static str,
    /// The result as given by the caller.
    pub result: Number,
    /// The result passed through [`format_number`].
    pub formatted_result: String,
    /// The full line, e.g. `"1.5 + 2.5 = 4"`.
    pub expression: String,
}

/// Create a record for a computation using the default precision.
///
/// The result is taken as given and is not recomputed.
pub fn create_calculation_record(
    a: impl Into<Number>,
    b: impl Into<Number>,
    operation: &str,
    result: impl Into<Number>,
) -> CalculationRecord {
    create_calculation_record_with_precision(a, b, operation, result, DEFAULT_DECIMAL_PLACES)
}

/// Create a record for a computation, formatting numbers to `decimal_places`.
pub fn create_calculation_record_with_precision(
    a: impl Into<Number>,
    b: impl Into<Number>,
    operation: &str,
    result: impl Into<Number>,
    decimal_places: usize,
) -> CalculationRecord {
    let (a, b, result) = (a.into(), b.into(), result.into());
    let symbol = get_operation_symbol(operation);
    let formatted_result = format_number(result, decimal_places);
    let expression = format!(
        "{} {} {} = {}",
        format_number(a, decimal_places),
        symbol,
        format_number(b, decimal_places),
        formatted_result
    );

    CalculationRecord {
        operand1: a,
        operand2: b,
        operation: operation.to_string(),
        symbol,
        result,
        formatted_result,
        expression,
    }
}
