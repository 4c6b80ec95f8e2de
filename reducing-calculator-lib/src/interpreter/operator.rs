use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Minus,
            BinaryOperator::Multiply => Token::Multiply,
            BinaryOperator::Divide => Token::Divide,
        }
    }

    /// Multiplicative operators are collapsed before any additive one is looked at.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, BinaryOperator::Multiply | BinaryOperator::Divide)
    }

    /// Plain IEEE-754 arithmetic, so a zero divisor gives an infinity or NaN.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
