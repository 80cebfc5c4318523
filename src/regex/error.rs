/// Whether the compilation of the regex succeeded.
pub type CompileResult<T> = core::result::Result<T, CompileError>;

/// Information about the error that occurred while compiling a regex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    /// Start and end position (in characters) of the offending token. The
    /// end position points one beyond the token.
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// The regex contains no tokens.
    Empty,
    /// A character that is neither an operand, an operator nor a parenthesis.
    UnsupportedToken(char),
    /// An operand or `(` was expected (e.g., `a|`, `(.a)`).
    ExpectedOperand,
    /// A binary operator, `*` or `)` was expected (e.g., `ab`, `a(b)`).
    ExpectedOperator,
    /// A `)` without a matching `(`.
    UnmatchedRightParen,
    /// A `(` that is never closed.
    UnclosedLeftParen,
    /// An operator found fewer fragments on the construction stack than it
    /// needs.
    MissingOperand,
    /// More than one fragment was left after the construction.
    DanglingFragments(usize),
}

impl CompileError {
    pub(crate) fn new(kind: CompileErrorKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }

    /// Whether the error reports a malformed expression, as opposed to an
    /// unsupported character.
    pub fn is_invalid_expression(&self) -> bool {
        !self.is_unsupported_token()
    }

    /// Whether the error reports a character outside of the regex syntax.
    pub fn is_unsupported_token(&self) -> bool {
        matches!(self.kind, CompileErrorKind::UnsupportedToken(_))
    }
}

impl std::fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CompileErrorKind::*;
        match self {
            Empty => write!(f, "invalid expression: the regex is empty"),
            UnsupportedToken(c) => write!(f, "unsupported token `{}`", c.escape_debug()),
            ExpectedOperand => write!(f, "invalid expression: expected OPERAND or LEFT_PAREN"),
            ExpectedOperator => write!(
                f,
                "invalid expression: expected CONCAT, ALT, STAR or RIGHT_PAREN"
            ),
            UnmatchedRightParen => {
                write!(f, "invalid expression: RIGHT_PAREN without LEFT_PAREN")
            }
            UnclosedLeftParen => write!(f, "invalid expression: expected RIGHT_PAREN"),
            MissingOperand => write!(f, "invalid expression: operator is missing an operand"),
            DanglingFragments(n) => write!(
                f,
                "invalid expression: {} sub expressions are not combined by an operator",
                n
            ),
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ERROR] ({}, {}): {}", self.pos.0, self.pos.1, self.kind)
    }
}

impl std::error::Error for CompileError {}
