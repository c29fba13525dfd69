//! Tokens making up a problem as it is typed.

/// One of the four arithmetic operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown in the problem line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Glyph understood by the arithmetic evaluator.
    pub fn evaluable_symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

/// A single syntactic unit of the problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A number being typed, kept as its characters so digits can be
    /// appended and removed one at a time.
    Digits(String),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Token {
    /// Check if this token is a number.
    pub fn is_digits(&self) -> bool {
        matches!(self, Self::Digits(_))
    }

    /// Check if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Check if an expression may end on this token and still be evaluated.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Digits(_) | Self::CloseParen)
    }

    pub(crate) fn push_display(&self, out: &mut String) {
        match self {
            Self::Digits(digits) => out.push_str(digits),
            Self::Operator(op) => out.push(op.symbol()),
            Self::OpenParen => out.push('('),
            Self::CloseParen => out.push(')'),
        }
    }

    pub(crate) fn push_evaluable(&self, out: &mut String) {
        match self {
            Self::Operator(op) => out.push(op.evaluable_symbol()),
            other => other.push_display(out),
        }
    }
}
