use crate::interpreter::error::EvaluationError;
use crate::interpreter::syntax::token_sequence::TokenSequence;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

type Characters<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Breaks the given line down into a sequence of tokens headed by a sentinel `+`.
///
/// A `-` directly after a number or a closing parenthesis is a subtraction. Anywhere else it
/// negates the next number literal instead of producing a token.
///
/// # Arguments
///
/// * `expression`: The line to tokenize, without whitespace.
///
/// returns: The token sequence, or an `InvalidCharacter` error.
///
/// # Examples
///
/// ```
/// use reducing_calculator::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let sequence = tokenize("2*-3")?;
/// assert_eq!(sequence.to_string(), "+ 2 * -3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<TokenSequence> {
    let mut sequence = TokenSequence::new();
    let mut characters: Characters = expression.chars().enumerate().peekable();
    let mut negate_next_number = false;

    while let Some(&(index, character)) = characters.peek() {
        if character.is_ascii_digit() {
            let mut value = read_number(&mut characters);
            if negate_next_number {
                value = -value;
                negate_next_number = false;
            }
            sequence.append(Token::Number(value));
            continue;
        }

        let token = match Token::from_symbol(character) {
            Some(token) => token,
            None => bail!(EvaluationError::InvalidCharacter { character, index }),
        };
        characters.next();

        if token == Token::Minus && !sequence.token(sequence.tail()).ends_operand() {
            negate_next_number = true;
            continue;
        }
        sequence.append(token);
    }

    log::trace!("tokenized {:?} into {}", expression, sequence);
    Ok(sequence)
}

/// Consumes a run of digits with at most one decimal point.
fn read_number(characters: &mut Characters) -> f64 {
    let mut value = 0.0;
    let mut place_value: Option<f64> = None;

    while let Some(&(_, character)) = characters.peek() {
        match (character, place_value) {
            ('.', None) => place_value = Some(1.0),
            (digit, None) if digit.is_ascii_digit() => {
                value = value * 10.0 + digit_value(digit);
            }
            (digit, Some(factor)) if digit.is_ascii_digit() => {
                let factor = factor * 0.1;
                value += digit_value(digit) * factor;
                place_value = Some(factor);
            }
            _ => break,
        }
        characters.next();
    }

    value
}

fn digit_value(digit: char) -> f64 {
    f64::from(digit as u8 - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens_of(expression: &str) -> Vec<Token> {
        tokenize(expression).unwrap().tokens()
    }

    fn error_of(expression: &str) -> EvaluationError {
        tokenize(expression)
            .unwrap_err()
            .downcast::<EvaluationError>()
            .unwrap()
    }

    #[test]
    fn empty_line_yields_only_the_sentinel() {
        assert_eq!(tokens_of(""), vec![Token::Plus]);
    }

    #[test]
    fn operators_and_groups_are_tokenized() {
        assert_eq!(
            tokens_of("(1+2)*3/4"),
            vec![
                Token::Plus,
                Token::GroupStart,
                Token::Number(1.0),
                Token::Plus,
                Token::Number(2.0),
                Token::GroupEnd,
                Token::Multiply,
                Token::Number(3.0),
                Token::Divide,
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn multi_digit_integer_is_one_token() {
        assert_eq!(tokens_of("1024"), vec![Token::Plus, Token::Number(1024.0)]);
    }

    #[test]
    fn decimal_digits_are_scaled_by_place_value() {
        let tokens = tokens_of("12.375");
        assert_eq!(tokens.len(), 2);
        assert!((tokens[1].value() - 12.375).abs() < 1e-12);
    }

    #[test]
    fn minus_after_number_is_subtraction() {
        assert_eq!(
            tokens_of("3-1"),
            vec![
                Token::Plus,
                Token::Number(3.0),
                Token::Minus,
                Token::Number(1.0)
            ]
        );
    }

    #[test]
    fn minus_after_operator_negates_the_next_number() {
        assert_eq!(
            tokens_of("1+-2"),
            vec![
                Token::Plus,
                Token::Number(1.0),
                Token::Plus,
                Token::Number(-2.0)
            ]
        );
    }

    #[test]
    fn leading_minus_negates_the_first_number() {
        assert_eq!(tokens_of("-5"), vec![Token::Plus, Token::Number(-5.0)]);
    }

    #[test]
    fn negation_carries_across_a_group_start() {
        assert_eq!(
            tokens_of("-(4)"),
            vec![
                Token::Plus,
                Token::GroupStart,
                Token::Number(-4.0),
                Token::GroupEnd
            ]
        );
    }

    #[test]
    fn minus_after_group_end_is_subtraction() {
        assert_eq!(
            tokens_of("(1)-2"),
            vec![
                Token::Plus,
                Token::GroupStart,
                Token::Number(1.0),
                Token::GroupEnd,
                Token::Minus,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn repeated_negation_does_not_toggle() {
        assert_eq!(tokens_of("--2"), vec![Token::Plus, Token::Number(-2.0)]);
    }

    #[test]
    fn letter_is_an_invalid_character() {
        assert_eq!(
            error_of("1+x"),
            EvaluationError::InvalidCharacter {
                character: 'x',
                index: 2
            }
        );
    }

    #[test]
    fn whitespace_is_an_invalid_character() {
        assert_eq!(
            error_of("1 +2"),
            EvaluationError::InvalidCharacter {
                character: ' ',
                index: 1
            }
        );
    }

    #[test]
    fn second_decimal_point_is_an_invalid_character() {
        assert_eq!(
            error_of("1.2.3"),
            EvaluationError::InvalidCharacter {
                character: '.',
                index: 3
            }
        );
    }

    #[test]
    fn index_counts_characters_not_bytes() {
        assert_eq!(
            error_of("é1"),
            EvaluationError::InvalidCharacter {
                character: 'é',
                index: 0
            }
        );
        assert_eq!(
            error_of("1+é"),
            EvaluationError::InvalidCharacter {
                character: 'é',
                index: 2
            }
        );
    }
}
