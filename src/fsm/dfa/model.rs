use super::super::{StateId, StateSet};
use std::collections::{BTreeMap, BTreeSet};

/// DFA finite-state machine.
///
/// The transition function is partial: a missing entry means the DFA cannot
/// move on that symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(super) alphabet: BTreeSet<char>,
    pub(super) start_state: StateId,
    pub(super) final_states: StateSet,
    pub(super) transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
}

impl Dfa {
    /// Creates a DFA without transitions or final states.
    pub(super) fn new(alphabet: BTreeSet<char>, start_state: StateId) -> Self {
        Self {
            alphabet,
            start_state,
            final_states: StateSet::new(),
            transitions: BTreeMap::new(),
        }
    }

    /// Sets the destination of `start` on `symbol`.
    ///
    /// # Panics
    ///
    /// In debug builds, when `start` already moves to another state on `symbol`.
    pub(super) fn add_transition(&mut self, start: StateId, symbol: char, end: StateId) {
        let previous = self
            .transitions
            .entry(start)
            .or_default()
            .insert(symbol, end);

        debug_assert!(
            !matches!(previous, Some(previous) if previous != end),
            "a DFA state can only move to a single state per symbol"
        );
    }

    pub(super) fn add_final_state(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn transitions(&self) -> &BTreeMap<StateId, BTreeMap<char, StateId>> {
        &self.transitions
    }

    /// Returns all states of the DFA in ascending order.
    pub fn states(&self) -> StateSet {
        let mut states = StateSet::from([self.start_state]);
        states.extend(&self.final_states);

        for (source, row) in &self.transitions {
            states.insert(*source);
            states.extend(row.values());
        }

        states
    }

    /// Returns the state `state` moves to on `symbol`, or `None` when there is
    /// no such transition.
    pub fn next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(&state)?.get(&symbol).copied()
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// Whether the empty string is in the language of the DFA.
    pub fn accepts_empty_string(&self) -> bool {
        self.is_final(self.start_state)
    }
}
