use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Multiply,
    Divide,
    GroupStart,
    GroupEnd,
}

impl Token {
    /// Maps a single-character symbol to its token. Numbers are not symbols.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Multiply),
            '/' => Some(Token::Divide),
            '(' => Some(Token::GroupStart),
            ')' => Some(Token::GroupEnd),
            _ => None,
        }
    }

    /// The numeric value of a number token, zero for every other kind.
    pub fn value(&self) -> f64 {
        match self {
            Token::Number(value) => *value,
            _ => 0.0,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Whether a `-` following this token is a binary subtraction rather than a negation.
    pub fn ends_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::GroupEnd)
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Minus => Some(BinaryOperator::Subtract),
            Token::Multiply => Some(BinaryOperator::Multiply),
            Token::Divide => Some(BinaryOperator::Divide),
            Token::Number(_) | Token::GroupStart | Token::GroupEnd => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Multiply => write!(f, "*"),
            Token::Divide => write!(f, "/"),
            Token::GroupStart => write!(f, "("),
            Token::GroupEnd => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
