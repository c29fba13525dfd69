//! Edit engine: applies one button press to the problem being typed.
//!
//! Every edit is absorbed. Presses that would make the problem
//! unevaluable (closing a parenthesis that was never opened, stacking
//! operators, a second decimal point) are either ignored or turned into
//! the nearest sensible edit, so the problem always stays a prefix of a
//! valid expression.

use super::button::Button;
use super::token::{Operator, Token};

/// The problem as typed so far, with its count of unmatched `(`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression {
    tokens: Vec<Token>,
    balance: usize,
}

/// Whether the previous press was `=`.
///
/// After `=`, typing a number or `(` starts a new problem instead of
/// extending the collapsed result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryMode {
    #[default]
    Idle,
    JustEvaluated,
}

impl EntryMode {
    /// The mode following an accepted press of `button`.
    pub fn after(button: Button) -> Self {
        if button == Button::Equals {
            Self::JustEvaluated
        } else {
            Self::Idle
        }
    }

    fn starts_fresh(self, button: Button) -> bool {
        self == Self::JustEvaluated && (button.is_numeric() || button == Button::OpenParen)
    }
}

/// Apply `button` to `expression`, returning the edited problem.
///
/// `solution` is the solution currently on display; `=` collapses the
/// problem into it.
pub fn apply(
    expression: &Expression,
    mode: EntryMode,
    button: Button,
    solution: &str,
) -> Expression {
    if button == Button::Clear {
        return Expression::new();
    }
    if button == Button::Equals {
        return Expression::from_solution(solution);
    }

    let mut next = if mode.starts_fresh(button) {
        Expression::new()
    } else {
        expression.clone()
    };

    match button {
        Button::Backspace => next.backspace(),
        Button::OpenParen => next.open_paren(),
        Button::CloseParen => next.close_paren(),
        Button::Digit(digit) => next.push_digit(digit),
        Button::Point => next.push_point(),
        Button::Operator(op) => next.push_operator(op),
        Button::Clear | Button::Equals => {}
    }

    next
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// A problem holding a single number, as left behind by `=`.
    pub fn from_solution(solution: &str) -> Self {
        let tokens = if solution.is_empty() {
            Vec::new()
        } else {
            vec![Token::Digits(solution.to_string())]
        };

        Self { tokens, balance: 0 }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of `(` still waiting for a `)`.
    pub fn balance(&self) -> usize {
        self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::OpenParen => self.balance += 1,
            Token::CloseParen => self.balance -= 1,
            _ => {}
        }
        self.tokens.push(token);
    }

    fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop()?;
        match token {
            Token::OpenParen => self.balance -= 1,
            Token::CloseParen => self.balance += 1,
            _ => {}
        }
        Some(token)
    }

    fn replace_last(&mut self, op: Operator) {
        if let Some(last) = self.tokens.last_mut() {
            *last = Token::Operator(op);
        }
    }

    fn backspace(&mut self) {
        if let Some(Token::Digits(digits)) = self.tokens.last_mut() {
            digits.pop();
            if digits.chars().any(|c| c.is_ascii_digit()) {
                return;
            }

            // A collapsed negative result keeps its sign as an operator.
            let signed = digits.starts_with('-');
            self.tokens.pop();
            if signed {
                self.tokens.push(Token::Operator(Operator::Subtract));
            }
            return;
        }
        self.pop();
    }

    fn open_paren(&mut self) {
        // No implicit multiplication: a number can't be followed by `(`.
        if !self.last().is_some_and(Token::is_digits) {
            self.push(Token::OpenParen);
        }
    }

    fn close_paren(&mut self) {
        if self.balance > 0 {
            self.push(Token::CloseParen);
        }
    }

    fn push_digit(&mut self, digit: char) {
        match self.tokens.last_mut() {
            Some(Token::Digits(digits)) => digits.push(digit),
            _ => self.push(Token::Digits(digit.to_string())),
        }
    }

    fn push_point(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Digits(digits)) => {
                if !digits.contains('.') {
                    digits.push('.');
                }
            }
            _ => self.push(Token::Digits("0.".to_string())),
        }
    }

    fn push_operator(&mut self, op: Operator) {
        if self.last().is_some_and(Token::is_complete) {
            self.push(Token::Operator(op));
            return;
        }

        let prev = match self.last() {
            Some(Token::Operator(prev)) => Some(*prev),
            _ => None,
        };

        match (op, prev) {
            (Operator::Subtract, Some(Operator::Subtract)) => self.replace_last(Operator::Add),
            (Operator::Subtract, Some(Operator::Add)) => self.replace_last(Operator::Subtract),
            // A minus that can't be a subtraction is the sign of the next number.
            (Operator::Subtract, _) => self.push(Token::Operator(op)),
            (_, Some(_)) => self.replace_operator(op),
            // Nothing to apply a binary operator to yet.
            (_, None) => {}
        }
    }

    /// Replace the trailing operator with `op`. A trailing sign is dropped
    /// together with the operator it follows; a sign with no operator
    /// before it is left alone.
    fn replace_operator(&mut self, op: Operator) {
        if self.ends_with_sign() {
            if self.tokens.len() >= 2 && self.tokens[self.tokens.len() - 2].is_operator() {
                self.pop();
                self.replace_last(op);
            }
        } else {
            self.replace_last(op);
        }
    }

    fn ends_with_sign(&self) -> bool {
        let len = self.tokens.len();
        if len == 0 || !self.tokens[len - 1].is_operator() {
            return false;
        }

        match len.checked_sub(2).map(|i| &self.tokens[i]) {
            None => true,
            Some(before) => !before.is_complete(),
        }
    }
}
