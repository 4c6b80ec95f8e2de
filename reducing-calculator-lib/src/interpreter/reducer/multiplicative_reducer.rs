use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::token_sequence::{NodeId, TokenSequence};
use crate::interpreter::token::Token;
use anyhow::{bail, Result};

/// Collapses every `*` and `/` in the chain starting at `head`, left to right, into the number it
/// evaluates to.
pub fn reduce_products(sequence: &mut TokenSequence, head: NodeId) -> Result<()> {
    let mut current = Some(head);
    while let Some(id) = current {
        let operator = match sequence.token(id).as_binary_operator() {
            Some(operator) if operator.is_multiplicative() => operator,
            _ => {
                current = sequence.next(id);
                continue;
            }
        };

        let (left, left_value) = operand(sequence, sequence.previous(id), operator)?;
        let (right, right_value) = operand(sequence, sequence.next(id), operator)?;
        let value = operator.evaluate(left_value, right_value);
        let product = sequence.replace(left, right, Token::Number(value));
        current = sequence.next(product);
    }
    Ok(())
}

fn operand(
    sequence: &TokenSequence,
    neighbour: Option<NodeId>,
    operator: BinaryOperator,
) -> Result<(NodeId, f64)> {
    match neighbour.map(|id| (id, sequence.token(id))) {
        Some((id, Token::Number(value))) => Ok((id, value)),
        _ => bail!(EvaluationError::invalid_syntax(format!(
            "{} is missing a number on one side",
            operator
        ))),
    }
}
