pub use self::{
    dfa::{determinize, Dfa, DfaSimulator, Status},
    nfa::{Compiler as NfaCompiler, Input, Nfa, NfaSimulator, NfaTransitions},
    traits::{Simulatable, Simulate},
};

#[cfg(test)]
pub(crate) use self::dfa::subset_construction;

use std::collections::BTreeSet;

pub type StateId = usize;

/// Set of NFA states. Being ordered, it doubles as the canonical key of a DFA
/// state during the subset construction.
pub type StateSet = BTreeSet<StateId>;

/// Label of a state in exported and rendered automata.
pub(crate) fn state_label(id: StateId) -> String {
    format!("q{}", id)
}

mod dfa;
mod nfa;
mod traits;
