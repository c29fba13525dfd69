//! Rendering of the problem line and of the string handed to the evaluator.

use super::token::Token;

/// Render tokens exactly as typed, e.g. `(12+3×`.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_display(&mut out);
    }
    out
}

/// Render tokens as a complete expression the evaluator can accept.
///
/// Trailing operators and `(` are dropped and every `(` left open is
/// closed, so `(1+2×` becomes `(1+2)`. Returns an empty string when
/// nothing evaluable remains.
pub fn to_evaluable(tokens: &[Token], balance: usize) -> String {
    let mut end = tokens.len();
    let mut open = balance;

    while end > 0 && !tokens[end - 1].is_complete() {
        end -= 1;
        if tokens[end] == Token::OpenParen {
            // Dropped, so it needs no closing paren.
            open = open.saturating_sub(1);
        }
    }

    if end == 0 {
        return String::new();
    }

    let mut out = String::new();
    for token in &tokens[..end] {
        token.push_evaluable(&mut out);
    }
    for _ in 0..open {
        out.push(')');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::Operator;

    fn digits(s: &str) -> Token {
        Token::Digits(s.to_string())
    }

    #[test]
    fn test_render_uses_keypad_glyphs() {
        let tokens = [
            Token::OpenParen,
            digits("12"),
            Token::Operator(Operator::Multiply),
            digits("3"),
            Token::CloseParen,
            Token::Operator(Operator::Divide),
        ];
        assert_eq!(render(&tokens), "(12×3)÷");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_evaluable_maps_operators() {
        let tokens = [
            digits("6"),
            Token::Operator(Operator::Divide),
            digits("2"),
            Token::Operator(Operator::Multiply),
            digits("3"),
        ];
        assert_eq!(to_evaluable(&tokens, 0), "6/2*3");
    }

    #[test]
    fn test_evaluable_trims_trailing_operator() {
        let tokens = [digits("5"), Token::Operator(Operator::Add)];
        assert_eq!(to_evaluable(&tokens, 0), "5");
    }

    #[test]
    fn test_evaluable_closes_open_parens() {
        let tokens = [
            Token::OpenParen,
            digits("1"),
            Token::Operator(Operator::Add),
            digits("2"),
        ];
        assert_eq!(to_evaluable(&tokens, 1), "(1+2)");
    }

    #[test]
    fn test_evaluable_drops_trailing_open_parens() {
        let tokens = [
            digits("2"),
            Token::Operator(Operator::Multiply),
            Token::OpenParen,
            Token::OpenParen,
            Token::Operator(Operator::Subtract),
        ];
        assert_eq!(to_evaluable(&tokens, 2), "2");

        let tokens = [
            Token::OpenParen,
            digits("2"),
            Token::Operator(Operator::Multiply),
            Token::OpenParen,
        ];
        assert_eq!(to_evaluable(&tokens, 2), "(2)");
    }

    #[test]
    fn test_evaluable_empty_when_nothing_complete() {
        assert_eq!(to_evaluable(&[], 0), "");
        let tokens = [Token::OpenParen, Token::Operator(Operator::Subtract)];
        assert_eq!(to_evaluable(&tokens, 1), "");
    }

    #[test]
    fn test_evaluable_does_not_touch_tokens() {
        let tokens = vec![digits("1"), Token::Operator(Operator::Add)];
        let _ = to_evaluable(&tokens, 0);
        assert_eq!(render(&tokens), "1+");
    }
}
