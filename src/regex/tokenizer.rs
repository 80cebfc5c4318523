use std::{iter::Enumerate, str::Chars};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Regex tokenizer.
pub(crate) struct Tokenizer<'a> {
    /// Iterator over the characters in the input (as defined in the rust `char`
    /// type), along with their position in the input.
    iter: Enumerate<Chars<'a>>,
}

/// Regex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Information about the kind of token along with the value of the token.
    pub kind: TokenKind,
    /// Start and end position of the token in the input text. The end position
    /// is one further than the end of the current token.
    pub pos: (usize, usize),
}

impl Token {
    /// Creates a new [`Token`].
    pub(crate) fn new(kind: TokenKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

/// Regex token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operand(char),
    Operator(OperatorKind),
    Invalid(char),
}

/// Regex operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum OperatorKind {
    Concat,
    Alt,
    Star,
    LeftParen,
    RightParen,
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (pos, ch) = self.iter.next()?;

        let token_kind = match ch {
            '.' | '|' | '*' | '(' | ')' => TokenKind::Operator(OperatorKind::from_glyph(ch)),
            c if is_operand(c) => TokenKind::Operand(c),

            c => TokenKind::Invalid(c),
        };

        Some(Token::new(token_kind, (pos, pos + 1)))
    }
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer.
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars().enumerate(),
        }
    }
}

/// Whether `c` can be used as a single-character operand.
///
/// Only ASCII letters and digits qualify, so the epsilon glyphs (`_` and `ε`)
/// can never collide with a real input symbol.
pub fn is_operand(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

impl OperatorKind {
    fn from_glyph(ch: char) -> Self {
        match ch {
            '.' => OperatorKind::Concat,
            '|' => OperatorKind::Alt,
            '*' => OperatorKind::Star,
            '(' => OperatorKind::LeftParen,
            ')' => OperatorKind::RightParen,

            _ => unreachable!("unhandled operator (`{}`)", ch),
        }
    }

    /// Character used for the operator in infix and postfix notation.
    pub fn glyph(&self) -> char {
        match self {
            OperatorKind::Concat => '.',
            OperatorKind::Alt => '|',
            OperatorKind::Star => '*',
            OperatorKind::LeftParen => '(',
            OperatorKind::RightParen => ')',
        }
    }

    /// Binding strength of the operator. Parentheses never take part in
    /// precedence comparisons and get 0.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            OperatorKind::Star => 3,
            OperatorKind::Concat => 2,
            OperatorKind::Alt => 1,
            OperatorKind::LeftParen | OperatorKind::RightParen => 0,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Operand(c) | TokenKind::Invalid(c) => write!(f, "{}", c),
            TokenKind::Operator(op) => write!(f, "{}", op.glyph()),
        }
    }
}
