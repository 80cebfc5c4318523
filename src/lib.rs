//! Compiles regular expressions in infix notation into finite automata.
//!
//! Supported syntax: single character operands (ASCII letters and digits),
//! explicit concatenation `.`, alternation `|`, Kleene star `*` and grouping
//! parentheses. The regex is rewritten to postfix notation, turned into an NFA
//! using Thompson's construction and determinized using the subset
//! construction.
//!
//! ```
//! use redfa::{compile, Simulatable};
//!
//! let compiled = compile("(a|b).c").unwrap();
//! assert!(compiled.dfa.accepts("ac"));
//! assert!(!compiled.dfa.accepts("abc"));
//! ```

pub use self::{
    export::{AutomatonDocument, Destination, Document},
    fsm::{
        determinize, Dfa, DfaSimulator, Input, Nfa, NfaCompiler, NfaSimulator, NfaTransitions,
        Simulatable, Simulate, StateId, StateSet, Status,
    },
    regex::{
        is_operand, to_postfix, CompileError, CompileErrorKind, CompileResult, OperatorKind, Token,
        TokenKind,
    },
};

pub mod export;
mod fsm;
mod regex;

/// NFA and equivalent DFA of a regex.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub nfa: Nfa,
    pub dfa: Dfa,
}

impl Compiled {
    /// Returns the exportable JSON document of both automata.
    pub fn to_document(&self) -> Document {
        Document::new(&self.nfa, &self.dfa)
    }
}

/// Compiles an infix regex into an NFA and the equivalent DFA.
///
/// # Fails
///
/// When the regex contains an unsupported character or is not a well-formed
/// expression. Nothing is built in that case.
pub fn compile(infix: &str) -> CompileResult<Compiled> {
    let postfix = to_postfix(infix)?;
    log::debug!(
        "postfix of `{}`: `{}`",
        infix,
        postfix.iter().map(|t| t.to_string()).collect::<String>()
    );

    let nfa = NfaCompiler::new().compile(&postfix)?;
    log::debug!("NFA has {} states", nfa.states().len());

    let dfa = determinize(&nfa);
    log::debug!("DFA has {} states", dfa.states().len());

    Ok(Compiled { nfa, dfa })
}

#[cfg(test)]
mod tests {
    use super::{compile, CompileErrorKind, Simulatable};

    #[test]
    fn compile_scenarios() {
        let compiled = compile("a.b|c*").unwrap();
        for accepted in ["", "c", "cc", "ab"] {
            assert!(compiled.dfa.accepts(accepted), "{:?}", accepted);
            assert!(compiled.nfa.accepts(accepted), "{:?}", accepted);
        }
        for rejected in ["a", "b", "abc"] {
            assert!(!compiled.dfa.accepts(rejected), "{:?}", rejected);
            assert!(!compiled.nfa.accepts(rejected), "{:?}", rejected);
        }
    }

    #[test]
    fn trailing_operator() {
        let err = compile("a|").unwrap_err();

        assert!(err.is_invalid_expression());
        assert_eq!(err.kind, CompileErrorKind::ExpectedOperand);
    }

    #[test]
    fn unsupported_token() {
        let err = compile("a?").unwrap_err();

        assert!(err.is_unsupported_token());
        assert_eq!(err.kind, CompileErrorKind::UnsupportedToken('?'));
    }

    #[test]
    fn empty() {
        assert_eq!(compile("").unwrap_err().kind, CompileErrorKind::Empty);
    }

    #[test]
    fn digits_are_operands() {
        let compiled = compile("(0|1)*.1").unwrap();

        assert!(compiled.dfa.accepts("0101"));
        assert!(!compiled.dfa.accepts("10"));
    }
}
