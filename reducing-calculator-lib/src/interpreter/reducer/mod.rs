mod group_reducer;
mod multiplicative_reducer;

use crate::interpreter::syntax::token_sequence::TokenSequence;
use anyhow::Result;

pub use group_reducer::reduce_groups;
pub use multiplicative_reducer::reduce_products;

/// Rewrites the sequence in place until only `+`, `-` and numbers remain.
///
/// Parenthesised groups are collapsed first, innermost to outermost, and then every `*` and `/`
/// is collapsed from left to right.
///
/// # Arguments
///
/// * `sequence`: A freshly tokenized sequence.
///
/// returns: Nothing, or the first error found while reducing.
///
/// # Examples
///
/// ```
/// use reducing_calculator::interpreter::lexer::tokenize;
/// use reducing_calculator::interpreter::reducer::reduce;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let mut sequence = tokenize("(1+2)*3-4")?;
/// reduce(&mut sequence)?;
/// assert_eq!(sequence.to_string(), "+ 9 - 4");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn reduce(sequence: &mut TokenSequence) -> Result<()> {
    reduce_groups(sequence)?;
    log::trace!("groups collapsed: {}", sequence);

    let head = sequence.head();
    reduce_products(sequence, head)?;
    log::trace!("products collapsed: {}", sequence);
    Ok(())
}
