//! Keypad buttons and their labels.

use super::token::Operator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// One of `0`-`9`.
    Digit(char),
    /// The decimal point.
    Point,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Equals,
    /// `AC`: wipe the problem and the solution.
    Clear,
    /// `←`: remove the last digit or symbol.
    Backspace,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ButtonError {
    #[error("Unknown button: {0:?}")]
    Unknown(String),
}

impl Button {
    /// Check if this button types part of a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }
}

impl FromStr for Button {
    type Err = ButtonError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let button = match label {
            "." => Self::Point,
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "=" => Self::Equals,
            _ if label.eq_ignore_ascii_case("ac") => Self::Clear,
            _ if label == "←" || label.eq_ignore_ascii_case("bs") => Self::Backspace,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c),
                    _ => return Err(ButtonError::Unknown(label.to_string())),
                }
            }
        };

        Ok(button)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(c) => write!(f, "{c}"),
            Self::Point => write!(f, "."),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "AC"),
            Self::Backspace => write!(f, "←"),
        }
    }
}
