use calculator::utils::create_calculation_record_with_precision;
use calculator::{
    CalcError, Calculator, Number, Operation, create_calculation_record, format_number,
    parse_expression, validate_input,
};

#[test]
fn test_history_length_tracks_successful_operations() {
    let mut calc = Calculator::new();
    calc.add(1, 2);
    calc.subtract(10, 3.5);
    calc.multiply(4, 6);
    assert!(calc.divide(1, 0).is_err());
    calc.divide(9, 4).unwrap();

    assert_eq!(calc.get_history().len(), 4);
    assert_eq!(calc.get_history()[3], "9 / 4 = 2.25");

    calc.clear_history();
    assert!(calc.get_history().is_empty());
}

#[test]
fn test_tokens_feed_calculator() {
    let tokens = parse_expression("12.5 * 4");
    assert_eq!(tokens, vec!["12.5", "*", "4"]);

    let a = validate_input(&tokens[0]).unwrap();
    let op: Operation = tokens[1].parse().unwrap();
    let b: Number = tokens[2].parse().unwrap();

    let mut calc = Calculator::new();
    let result = calc.apply(op, a, b).unwrap();
    assert_eq!(result, 50.0);
    assert_eq!(format_number(result, 2), "50");
    assert_eq!(calc.get_history(), vec!["12.5 * 4 = 50.0"]);
}

#[test]
fn test_record_from_calculator_result() {
    let mut calc = Calculator::new();
    let result = calc.apply(Operation::Divide, 10, 4).unwrap();

    let record = create_calculation_record(10, 4, Operation::Divide.name(), result);
    assert_eq!(record.symbol, "/");
    assert_eq!(record.expression, "10 / 4 = 2.5");
}

#[test]
fn test_record_json_shape() {
    let record = create_calculation_record_with_precision(10, 3, "subtract", 7, 2);
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "operand1": 10,
            "operand2": 3,
            "operation": "subtract",
            "symbol": "-",
            "result": 7,
            "formatted_result": "7",
            "expression": "10 - 3 = 7",
        })
    );

    let record = create_calculation_record(1.5, 2.5, "add", 4.0);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["operand1"], 1.5);
    assert_eq!(value["result"], 4.0);
    assert!(value["result"].is_f64());
}

#[test]
fn test_division_by_zero_message() {
    let mut calc = Calculator::new();
    let err = calc.divide(5.5, 0).unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(err.to_string(), "cannot divide by zero");
}
