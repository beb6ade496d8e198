use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use calculator::calculator::{Calculator, Number, Operation};
use calculator::config::Config;
use calculator::utils::{
    create_calculation_record_with_precision, get_operation_symbol, is_number, parse_expression,
    validate_input,
};
use calculator::{demo, logging};

/// A four-function calculator with an operation history.
#[derive(Parser, Debug)]
#[command(name = "calculator", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimal places for formatted records (overrides config)
    #[arg(long, global = true)]
    decimal_places: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sample computations and print the history
    Demo,
    /// Perform a single operation
    Calc {
        #[arg(value_enum)]
        operation: Operation,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Split an expression into tokens
    Tokenize { expression: String },
    /// Check whether text is a valid number
    Check {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the symbol for an operation name
    Symbol { name: String },
    /// Build a calculation record
    Record {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        operation: String,
        #[arg(allow_hyphen_values = true)]
        result: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_operand(text: &str) -> Result<Number> {
    text.parse::<Number>()
        .with_context(|| format!("Invalid operand '{}'", text))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.logging.default = "debug".to_string();
    }
    if let Some(places) = cli.decimal_places {
        config.decimal_places = places;
    }
    logging::init(&config.logging);
    tracing::debug!("Loaded config: {:?}", config);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo::run_stdout()?,
        Command::Calc { operation, a, b } => {
            let mut calc = Calculator::new();
            let result = calc.apply(operation, parse_operand(&a)?, parse_operand(&b)?)?;
            println!("{}", result);
        }
        Command::Tokenize { expression } => {
            println!("{}", parse_expression(&expression).join(" "));
        }
        Command::Check { text } => {
            let validated = validate_input(&text)
                .map(|value| Number::Float(value).to_string())
                .unwrap_or_else(|| "invalid".to_string());
            println!("is_number: {}", is_number(&text));
            println!("validated: {}", validated);
        }
        Command::Symbol { name } => println!("{}", get_operation_symbol(&name)),
        Command::Record {
            a,
            b,
            operation,
            result,
            json,
        } => {
            let record = create_calculation_record_with_precision(
                parse_operand(&a)?,
                parse_operand(&b)?,
                &operation,
                parse_operand(&result)?,
                config.decimal_places,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record.expression);
            }
        }
    }

    Ok(())
}
