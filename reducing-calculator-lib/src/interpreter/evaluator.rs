use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::token_sequence::{NodeId, TokenSequence};
use crate::interpreter::token::Token;
use anyhow::{bail, Result};

/// Sums up a fully reduced token chain.
///
/// Every number is added or subtracted according to the token right before it, so the chain must
/// alternate between `+`/`-` and numbers, starting with its sentinel.
///
/// # Arguments
///
/// * `sequence`: The sequence owning the chain.
/// * `head`: The sentinel the chain starts with.
///
/// returns: The value of the chain, or `InvalidSyntax` if a number is preceded by anything other
/// than `+` or `-`.
pub fn evaluate(sequence: &TokenSequence, head: NodeId) -> Result<f64> {
    let mut answer = 0.0;
    for (id, token) in sequence.iter(head) {
        let value = match token {
            Token::Number(value) => value,
            _ => continue,
        };
        let operator = sequence
            .previous(id)
            .and_then(|previous| sequence.token(previous).as_binary_operator());
        answer = match operator {
            Some(operator @ (BinaryOperator::Add | BinaryOperator::Subtract)) => {
                operator.evaluate(answer, value)
            }
            _ => bail!(EvaluationError::invalid_syntax(format!(
                "{} is not preceded by + or -",
                value
            ))),
        };
    }
    Ok(answer)
}
