pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod reducer;
pub mod syntax;
pub mod token;

use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A single line made of numbers, `+ - * /` and parentheses, without whitespace.
///
/// returns: The value of the expression. Dividing by zero gives an infinity or NaN rather than an
/// error.
///
/// # Examples
///
/// ```
/// use reducing_calculator::interpreter::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let answer = calculate("1+2*3+4/2-5")?;
/// assert_eq!(answer, 4.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64> {
    let mut sequence = lexer::tokenize(expression)?;
    reducer::reduce(&mut sequence)?;
    let answer = evaluator::evaluate(&sequence, sequence.head())?;
    log::debug!("{} = {}", expression, answer);
    Ok(answer)
}

/// Pretty-prints the given tokens with whitespace around the binary operators.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use reducing_calculator::interpreter::tokens_to_string;
/// use reducing_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::GroupStart,
///     Token::Number(1.5),
///     Token::Plus,
///     Token::Number(2.0),
///     Token::GroupEnd,
/// ];
/// assert_eq!(tokens_to_string(tokens)?, "(1.5 + 2)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Plus | Token::Minus | Token::Multiply | Token::Divide => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
