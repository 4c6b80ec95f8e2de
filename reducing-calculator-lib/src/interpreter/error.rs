use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

/// Represents every way the evaluation of a line can fail.
///
/// Division by zero is not one of them: it evaluates to an infinity or NaN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// A character that is not a digit, decimal point, operator or parenthesis.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its character index in the line.
        index: usize,
    },
    /// A `(` without a matching `)`, or the other way around.
    UnbalancedGroup,
    /// A number or operator is missing its neighbour after the reductions.
    InvalidSyntax {
        /// What was out of place.
        reason: String,
    },
}

impl EvaluationError {
    pub(crate) fn invalid_syntax(reason: impl Into<String>) -> Self {
        EvaluationError::InvalidSyntax {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::InvalidCharacter { character, index } => {
                write!(f, "invalid character: '{}' at index={}", character, index)
            }
            EvaluationError::UnbalancedGroup => write!(f, "unbalanced parenthesis"),
            EvaluationError::InvalidSyntax { reason } => write!(f, "invalid syntax: {}", reason),
        }
    }
}

impl Error for EvaluationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_message_names_character_and_index() {
        let error = EvaluationError::InvalidCharacter {
            character: 'x',
            index: 3,
        };
        assert_eq!(error.to_string(), "invalid character: 'x' at index=3");
    }

    #[test]
    fn error_survives_conversion_to_anyhow() {
        let error: anyhow::Error = EvaluationError::UnbalancedGroup.into();
        assert_eq!(
            error.downcast_ref::<EvaluationError>(),
            Some(&EvaluationError::UnbalancedGroup)
        );
    }
}
