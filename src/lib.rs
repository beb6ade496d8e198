//! A four-function calculator with an operation history, plus helpers for
//! validating, formatting and tokenizing numeric text.

pub mod calculator;
pub mod config;
pub mod demo;
pub mod logging;
pub mod utils;

pub use calculator::{CalcError, Calculator, Number, Operation};
pub use utils::{
    CalculationRecord, create_calculation_record, format_number, get_operation_symbol,
    is_number, parse_expression, validate_input,
};
