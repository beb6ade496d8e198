//! Stateless helpers for numbers, expressions and calculation records.

mod expression;
mod numeric;
mod record;

pub use expression::parse_expression;
pub use numeric::{DEFAULT_DECIMAL_PLACES, format_number, is_number, validate_input};
pub use record::{
    CalculationRecord, create_calculation_record, create_calculation_record_with_precision,
    get_operation_symbol,
};
