pub use self::{
    error::{CompileError, CompileErrorKind, CompileResult},
    postfix::to_postfix,
    tokenizer::{is_operand, OperatorKind, Token, TokenKind},
};

mod error;
mod postfix;
mod tokenizer;

#[cfg(test)]
mod tests;
