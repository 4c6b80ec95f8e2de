use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::reducer::multiplicative_reducer::reduce_products;
use crate::interpreter::syntax::token_sequence::{NodeId, TokenSequence};
use crate::interpreter::token::Token;
use anyhow::{bail, Result};

/// Collapses every parenthesised group into the number it evaluates to.
///
/// The sequence is walked from its tail towards its head, so by the time a `(` is reached every
/// group nested inside it has already become a single number and the nearest `)` after it is its
/// match.
pub fn reduce_groups(sequence: &mut TokenSequence) -> Result<()> {
    let mut current = Some(sequence.tail());
    while let Some(id) = current {
        if sequence.token(id) != Token::GroupStart {
            current = sequence.previous(id);
            continue;
        }

        let group_end = find_group_end(sequence, id)?;
        let value = evaluate_group(sequence, id, group_end)?;
        let number = sequence.replace(id, group_end, Token::Number(value));
        current = sequence.previous(number);
    }

    if sequence.tokens().contains(&Token::GroupEnd) {
        bail!(EvaluationError::UnbalancedGroup);
    }
    Ok(())
}

fn find_group_end(sequence: &TokenSequence, group_start: NodeId) -> Result<NodeId> {
    match sequence
        .iter(group_start)
        .find(|(_, token)| *token == Token::GroupEnd)
    {
        Some((id, _)) => Ok(id),
        None => bail!(EvaluationError::UnbalancedGroup),
    }
}

/// Detaches the inside of a group and reduces it on its own.
fn evaluate_group(
    sequence: &mut TokenSequence,
    group_start: NodeId,
    group_end: NodeId,
) -> Result<f64> {
    let first = sequence.next(group_start);
    let last = sequence.previous(group_end);
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) if first != group_end => (first, last),
        _ => bail!(EvaluationError::invalid_syntax("empty parentheses")),
    };

    let head = sequence.detach(first, last);
    reduce_products(sequence, head)?;
    let value = evaluate(sequence, head)?;
    log::trace!("group collapsed to {}", value);
    Ok(value)
}
