use super::{
    super::{StateId, StateSet},
    model::{Input, Nfa},
};
use crate::regex::{
    self, CompileError, CompileErrorKind, CompileResult, OperatorKind, Token, TokenKind,
};

/// Postfix regex to NFA compiler (Thompson's construction).
///
/// The compiler owns the state id counter, ids are never reused, so fragments
/// built by the same compiler never share states until they are combined.
pub struct Compiler {
    /// The next id handed out to a new state.
    next_id: StateId,
    /// Construction stack of NFA fragments.
    fragments: Vec<Fragment>,
}

/// Partially built NFA.
///
/// A fragment covers the contiguous state ids `first..` up to the id of the
/// next fragment on the stack (or up to `next_id` for the top fragment).
#[derive(Debug)]
struct Fragment {
    nfa: Nfa,
    first: StateId,
}

impl std::str::FromStr for Nfa {
    type Err = CompileError;

    /// Compiles an infix regex to an NFA.
    fn from_str(infix: &str) -> Result<Self, Self::Err> {
        Compiler::new().compile(&regex::to_postfix(infix)?)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            fragments: Vec::new(),
        }
    }

    /// Consumes the postfix `tokens` and returns the single resulting NFA.
    ///
    /// # Fails
    ///
    /// When an operator does not find enough operands, or when more than one
    /// fragment remains after all tokens are consumed.
    pub fn compile(mut self, tokens: &[Token]) -> CompileResult<Nfa> {
        for token in tokens {
            match token.kind {
                TokenKind::Operand(c) => self.operand(c),
                TokenKind::Operator(OperatorKind::Star) => self.star(*token)?,
                TokenKind::Operator(OperatorKind::Concat) => self.concat(*token)?,
                TokenKind::Operator(OperatorKind::Alt) => self.alt(*token)?,
                TokenKind::Operator(OperatorKind::LeftParen) => {
                    return Err(CompileError::new(
                        CompileErrorKind::UnclosedLeftParen,
                        token.pos,
                    ))
                }
                TokenKind::Operator(OperatorKind::RightParen) => {
                    return Err(CompileError::new(
                        CompileErrorKind::UnmatchedRightParen,
                        token.pos,
                    ))
                }
                TokenKind::Invalid(c) => {
                    return Err(CompileError::new(
                        CompileErrorKind::UnsupportedToken(c),
                        token.pos,
                    ))
                }
            }
        }

        let span = (
            tokens.iter().map(|t| t.pos.0).min().unwrap_or(0),
            tokens.iter().map(|t| t.pos.1).max().unwrap_or(0),
        );

        match self.fragments.pop() {
            None => Err(CompileError::new(CompileErrorKind::Empty, span)),
            Some(Fragment { nfa, .. }) if self.fragments.is_empty() => {
                log::trace!(
                    "built NFA with {} states from {} postfix tokens",
                    self.next_id,
                    tokens.len()
                );
                Ok(nfa)
            }
            Some(_) => Err(CompileError::new(
                CompileErrorKind::DanglingFragments(self.fragments.len() + 1),
                span,
            )),
        }
    }

    /// Returns the next `n` fresh state ids, starting from the first one.
    fn new_state_ids(&mut self, n: StateId) -> StateId {
        let first = self.next_id;
        self.next_id += n;
        first
    }

    /// Pops the top fragment, `operator` is the token that needs it.
    fn pop(&mut self, operator: Token) -> CompileResult<Fragment> {
        self.fragments
            .pop()
            .ok_or_else(|| CompileError::new(CompileErrorKind::MissingOperand, operator.pos))
    }

    /// Pops the two top fragments, the lower one first.
    fn pop_pair(&mut self, operator: Token) -> CompileResult<(Fragment, Fragment)> {
        if self.fragments.len() < 2 {
            return Err(CompileError::new(
                CompileErrorKind::MissingOperand,
                operator.pos,
            ));
        }

        let rhs = self.pop(operator)?;
        let lhs = self.pop(operator)?;
        Ok((lhs, rhs))
    }

    /// `start --c--> end`
    fn operand(&mut self, c: char) {
        let start = self.new_state_ids(2);

        self.fragments.push(Fragment {
            nfa: Nfa::literal(start, start + 1, c),
            first: start,
        });
    }

    /// Zero or more repetitions: the new start bypasses the fragment to the new
    /// final state, every old final state loops back to the old start.
    fn star(&mut self, operator: Token) -> CompileResult<()> {
        let Fragment { nfa: inner, first } = self.pop(operator)?;

        let new_start = self.new_state_ids(2);
        let new_final = new_start + 1;
        let loop_targets = [inner.start_state, new_final];

        let mut nfa = Nfa::new(new_start, StateSet::from([new_final]));
        nfa.add_transition(new_start, Input::Eps, loop_targets);
        for final_state in &inner.final_states {
            nfa.add_transition(*final_state, Input::Eps, loop_targets);
        }
        nfa.merge(inner);

        self.fragments.push(Fragment { nfa, first });
        Ok(())
    }

    /// Every final state of the left-hand side continues at the start of the
    /// right-hand side.
    fn concat(&mut self, operator: Token) -> CompileResult<()> {
        let (Fragment { nfa: mut lhs, first }, Fragment { nfa: rhs, .. }) =
            self.pop_pair(operator)?;

        for final_state in std::mem::take(&mut lhs.final_states) {
            lhs.add_transition(final_state, Input::Eps, [rhs.start_state]);
        }
        lhs.final_states = rhs.final_states.clone();
        lhs.merge(rhs);

        self.fragments.push(Fragment { nfa: lhs, first });
        Ok(())
    }

    /// Both sides are moved one id up to make room for the new start state in
    /// front of them; the new final state is put after them.
    fn alt(&mut self, operator: Token) -> CompileResult<()> {
        let (Fragment { nfa: mut lhs, first }, Fragment { nfa: mut rhs, .. }) =
            self.pop_pair(operator)?;

        lhs.shift_states(1);
        rhs.shift_states(1);

        let new_start = first;
        let new_final = self.new_state_ids(2) + 1;

        let mut nfa = Nfa::new(new_start, StateSet::from([new_final]));
        nfa.add_transition(new_start, Input::Eps, [lhs.start_state, rhs.start_state]);
        for final_state in lhs.final_states.iter().chain(&rhs.final_states) {
            nfa.add_transition(*final_state, Input::Eps, [new_final]);
        }
        nfa.merge(lhs);
        nfa.merge(rhs);

        self.fragments.push(Fragment { nfa, first });
        Ok(())
    }
}
