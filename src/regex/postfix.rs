//! Infix to postfix rewriting of regular expressions (shunting-yard).
//!
//! Operators, from strongest to weakest binding: `*` (Kleene star), `.`
//! (concatenation) and `|` (alternation). `.` and `|` are left-associative.
//! While scanning, the rewriter also checks that operands and operators
//! alternate correctly so that malformed input is rejected here, instead of
//! producing a postfix sequence that happens to build a wrong automaton.

use super::{
    error::{CompileError, CompileErrorKind, CompileResult},
    tokenizer::{OperatorKind, Token, TokenKind, Tokenizer},
};

/// Infix to postfix rewriter.
pub(crate) struct Rewriter<'a> {
    /// Stream of infix tokens being rewritten.
    tokens: Tokenizer<'a>,
    /// Operators (and open parentheses) waiting for their right-hand side.
    operators: Vec<Token>,
    /// Postfix tokens emitted so far.
    output: Vec<Token>,
    /// Whether the next token has to start an operand (an operand or `(`).
    expect_operand: bool,
    /// Position one beyond the last token seen.
    end: usize,
}

impl<'a> Rewriter<'a> {
    /// Creates a new rewriter for the infix `input`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(input),
            operators: Vec::new(),
            output: Vec::new(),
            expect_operand: true,
            end: 0,
        }
    }

    /// Rewrites the whole input to postfix order.
    pub(crate) fn rewrite(mut self) -> CompileResult<Vec<Token>> {
        while let Some(token) = self.tokens.next() {
            self.end = token.pos.1;
            self.token(token)?;
        }

        if self.output.is_empty() && self.operators.is_empty() {
            return Err(CompileError::new(CompileErrorKind::Empty, (0, 0)));
        }

        if self.expect_operand {
            return Err(CompileError::new(
                CompileErrorKind::ExpectedOperand,
                (self.end, self.end),
            ));
        }

        while let Some(op) = self.operators.pop() {
            if op.kind == TokenKind::Operator(OperatorKind::LeftParen) {
                return Err(CompileError::new(
                    CompileErrorKind::UnclosedLeftParen,
                    op.pos,
                ));
            }
            self.output.push(op);
        }

        Ok(self.output)
    }

    fn token(&mut self, token: Token) -> CompileResult<()> {
        match token.kind {
            TokenKind::Invalid(c) => Err(CompileError::new(
                CompileErrorKind::UnsupportedToken(c),
                token.pos,
            )),
            TokenKind::Operand(_) => {
                self.expect(true, token)?;
                self.output.push(token);
                self.expect_operand = false;
                Ok(())
            }
            TokenKind::Operator(OperatorKind::LeftParen) => {
                self.expect(true, token)?;
                self.operators.push(token);
                Ok(())
            }
            TokenKind::Operator(OperatorKind::RightParen) => {
                self.expect(false, token)?;
                self.close_group(token)
            }
            TokenKind::Operator(OperatorKind::Star) => {
                // Unary postfix, it never waits for a right-hand side and is
                // popped by the next binary operator, `)` or the end of input.
                self.expect(false, token)?;
                self.operators.push(token);
                Ok(())
            }
            TokenKind::Operator(op) => {
                self.expect(false, token)?;
                self.pop_while_binding(op);
                self.operators.push(token);
                self.expect_operand = true;
                Ok(())
            }
        }
    }

    /// Checks whether the token is in a valid position. `operand` tells
    /// whether the token starts an operand.
    fn expect(&self, operand: bool, token: Token) -> CompileResult<()> {
        match (self.expect_operand, operand) {
            (true, false) => Err(CompileError::new(
                CompileErrorKind::ExpectedOperand,
                token.pos,
            )),
            (false, true) => Err(CompileError::new(
                CompileErrorKind::ExpectedOperator,
                token.pos,
            )),
            _ => Ok(()),
        }
    }

    /// Emits the operators on the stack that bind at least as strong as `op`
    /// (left-associativity), stopping at an open parenthesis.
    fn pop_while_binding(&mut self, op: OperatorKind) {
        while let Some(&top) = self.operators.last() {
            let TokenKind::Operator(top_op) = top.kind else {
                unreachable!("only operators are pushed on the operator stack");
            };

            if top_op == OperatorKind::LeftParen || top_op.precedence() < op.precedence() {
                break;
            }

            self.output.push(top);
            self.operators.pop();
        }
    }

    /// Emits the operators up to the matching `(`, which is discarded.
    fn close_group(&mut self, right_paren: Token) -> CompileResult<()> {
        loop {
            match self.operators.pop() {
                Some(Token {
                    kind: TokenKind::Operator(OperatorKind::LeftParen),
                    ..
                }) => return Ok(()),
                Some(op) => self.output.push(op),
                None => {
                    return Err(CompileError::new(
                        CompileErrorKind::UnmatchedRightParen,
                        right_paren.pos,
                    ))
                }
            }
        }
    }
}

/// Rewrites an infix regex to postfix order.
pub fn to_postfix(infix: &str) -> CompileResult<Vec<Token>> {
    Rewriter::new(infix).rewrite()
}

#[cfg(test)]
mod tests {
    use super::{
        super::error::{CompileError, CompileErrorKind::*},
        to_postfix,
    };

    fn postfix(infix: &str) -> String {
        to_postfix(infix)
            .expect(infix)
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    fn error(infix: &str) -> CompileError {
        to_postfix(infix).expect_err(infix)
    }

    #[test]
    fn precedence() {
        assert_eq!(postfix("a.b|c*"), "ab.c*|");
        assert_eq!(postfix("a|b.c"), "abc.|");
        assert_eq!(postfix("a*.b"), "a*b.");
        assert_eq!(postfix("a|b*"), "ab*|");
    }

    #[test]
    fn left_associative() {
        assert_eq!(postfix("a.b.c"), "ab.c.");
        assert_eq!(postfix("a|b|c"), "ab|c|");
    }

    #[test]
    fn groups() {
        assert_eq!(postfix("(a|b).c"), "ab|c.");
        assert_eq!(postfix("(a|b)*"), "ab|*");
        assert_eq!(postfix("a.(b.(c|d))*"), "abcd|.*.");
        assert_eq!(postfix("((a))"), "a");
        assert_eq!(postfix("a**"), "a**");
    }

    #[test]
    fn malformed() {
        assert_eq!(error("").kind, Empty);
        assert_eq!(error("a|").kind, ExpectedOperand);
        assert_eq!(error("a|").pos, (2, 2));
        assert_eq!(error("|a").kind, ExpectedOperand);
        assert_eq!(error("*a").kind, ExpectedOperand);
        assert_eq!(error("a.*b").kind, ExpectedOperand);
        assert_eq!(error("()").kind, ExpectedOperand);
        assert_eq!(error("ab").kind, ExpectedOperator);
        assert_eq!(error("a(b)").kind, ExpectedOperator);
        assert_eq!(error("a*b").kind, ExpectedOperator);
        assert_eq!(error("a)").kind, UnmatchedRightParen);
        assert_eq!(error("(a").kind, UnclosedLeftParen);
        assert_eq!(error("(a").pos, (0, 1));
    }

    #[test]
    fn unsupported() {
        let err = error("a+b");
        assert_eq!(err.kind, UnsupportedToken('+'));
        assert_eq!(err.pos, (1, 2));
        assert!(err.is_unsupported_token());
        assert_eq!(error("a . b").kind, UnsupportedToken(' '));
    }
}
