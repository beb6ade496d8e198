//! Tokenization of arithmetic expression text.
//!
//! Splits input into number and operator tokens. Nothing is evaluated and
//! no precedence structure is built.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a numeric literal (`12`, `3.`, `3.5`, `.5`) or a single
    /// operator or parenthesis.
    static ref TOKEN: Regex = Regex::new(
        r"\d+\.?\d*|\.\d+|[+\-*/()]"
    ).unwrap();
}

/// Parse an expression into a list of tokens.
///
/// All whitespace is removed first. Characters that belong to neither a
/// number nor an operator are dropped silently.
pub fn parse_expression(expression: &str) -> Vec<String> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let tokens: Vec<String> = TOKEN
        .find_iter(&compact)
        .map(|m| m.as_str().to_string())
        .collect();

    tracing::trace!("Tokenized {:?} into {} tokens", expression, tokens.len());
    tokens
}
