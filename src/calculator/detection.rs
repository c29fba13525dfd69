//! Splitting typed lines into keypad presses.
//!
//! Lets a line such as `(1+2)×3=` or `12 BS AC` drive the calculator one
//! button at a time.

use super::button::{Button, ButtonError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One keypad label: a multi-letter key name or any single non-space character.
    static ref KEY_LABEL: Regex = Regex::new(r"(?i)ac|bs|\S").unwrap();
}

/// Split `line` into button labels, ignoring whitespace.
pub fn split_keys(line: &str) -> Vec<&str> {
    KEY_LABEL.find_iter(line).map(|m| m.as_str()).collect()
}

/// Parse every label in `line` into a button.
///
/// Fails on the first unknown label, before any button is returned.
pub fn parse_keys(line: &str) -> Result<Vec<Button>, ButtonError> {
    split_keys(line).into_iter().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::Operator;

    #[test]
    fn test_split_compact_line() {
        assert_eq!(split_keys("(1+2)×3="), ["(", "1", "+", "2", ")", "×", "3", "="]);
    }

    #[test]
    fn test_split_named_keys() {
        assert_eq!(split_keys("12 BS AC 4"), ["1", "2", "BS", "AC", "4"]);
        assert_eq!(split_keys("7←ac"), ["7", "←", "ac"]);
    }

    #[test]
    fn test_named_keys_right_after_digits() {
        assert_eq!(split_keys("3AC"), ["3", "AC"]);
        assert_eq!(split_keys("12bs"), ["1", "2", "bs"]);
        assert_eq!(
            parse_keys("12BS").unwrap(),
            [Button::Digit('1'), Button::Digit('2'), Button::Backspace]
        );
    }

    #[test]
    fn test_letters_inside_words_are_single_keys() {
        assert_eq!(split_keys("abc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            parse_keys("1 − .").unwrap(),
            [
                Button::Digit('1'),
                Button::Operator(Operator::Subtract),
                Button::Point
            ]
        );
        assert_eq!(
            parse_keys("1%2"),
            Err(ButtonError::Unknown("%".to_string()))
        );
    }

    #[test]
    fn test_blank_line() {
        assert!(split_keys("   ").is_empty());
    }
}
