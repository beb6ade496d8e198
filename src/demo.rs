//! The demonstration run printed by `calculator demo`.

use std::io::{self, Write};

use crate::calculator::{Calculator, Number, Operation};

/// Sample computations shown by the demo, in order.
pub const SAMPLES: &[(Number, Operation, Number)] = &[
    (Number::Int(1), Operation::Add, Number::Int(2)),
    (Number::Int(10), Operation::Subtract, Number::Int(3)),
    (Number::Int(4), Operation::Multiply, Number::Int(6)),
    (Number::Int(12), Operation::Divide, Number::Int(3)),
    (Number::Float(5.5), Operation::Add, Number::Float(2.3)),
    (Number::Int(15), Operation::Subtract, Number::Float(7.5)),
    (Number::Float(3.5), Operation::Multiply, Number::Float(2.0)),
    (Number::Float(7.5), Operation::Divide, Number::Float(2.5)),
];

/// Features listed at the end of the demo.
pub const PLANNED_FEATURES: &[&str] = &[
    "Advanced math functions",
    "Expression parsing",
    "Scientific computing",
    "Data visualization",
];

/// Run every sample through `calc` and write the report to `out`.
pub fn run(calc: &mut Calculator, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Welcome to the simple calculator")?;
    writeln!(out, "{}", "=".repeat(30))?;

    writeln!(out, "Basic operations:")?;
    for &(a, op, b) in SAMPLES {
        let result = calc.apply(op, a, b)?;
        writeln!(out, "{} {} {} = {}", a, op.symbol(), b, result)?;
    }

    writeln!(out, "\nHistory:")?;
    for entry in calc.get_history() {
        writeln!(out, "  {}", entry)?;
    }

    writeln!(out, "\nMore features are on the way...")?;
    for feature in PLANNED_FEATURES {
        writeln!(out, "  - {}", feature)?;
    }

    out.flush()?;
    Ok(())
}

/// Run the demo against stdout with a fresh calculator.
pub fn run_stdout() -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    run(&mut calc, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut calc = Calculator::new();
        let mut out = Vec::new();
        run(&mut calc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1 + 2 = 3\n"));
        assert!(text.contains("12 / 3 = 4.0\n"));
        assert!(text.contains("5.5 + 2.3 = 7.8\n"));
        assert!(text.contains("7.5 / 2.5 = 3.0\n"));
        assert!(text.contains("  - Data visualization\n"));
        assert_eq!(calc.len(), SAMPLES.len());
    }

    #[test]
    fn test_demo_history_matches_printed_lines() {
        let mut calc = Calculator::new();
        let mut out = Vec::new();
        run(&mut calc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for entry in calc.get_history() {
            assert!(text.contains(&format!("  {}\n", entry)));
        }
    }
}
