//! JSON export of compiled automata.
//!
//! States are labelled `q<id>`. Object keys are kept in lexicographic order
//! (`q0`, `q1`, `q10`, `q2`, ...), arrays of states in ascending id order.

use crate::fsm::{state_label, Dfa, Input, Nfa, StateSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// Exported NFA and DFA of a single regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub dfa: AutomatonDocument,
    pub nfa: AutomatonDocument,
}

/// Exported automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonDocument {
    pub accept: Vec<String>,
    pub start: String,
    pub states: Vec<String>,
    /// Transitions per source state, per symbol. `None` (exported as `null`)
    /// when the automaton has no transitions at all.
    pub transitions: Option<BTreeMap<String, BTreeMap<String, Destination>>>,
}

/// Destination of a transition. Nondeterministic transitions have more than
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Destination {
    Single(String),
    Multiple(Vec<String>),
}

impl Document {
    pub fn new(nfa: &Nfa, dfa: &Dfa) -> Self {
        Self {
            dfa: dfa.into(),
            nfa: nfa.into(),
        }
    }

    /// Serializes the document to pretty printed JSON (two space indent).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn labels(states: &StateSet) -> Vec<String> {
    states.iter().map(|s| state_label(*s)).collect()
}

impl From<&Nfa> for AutomatonDocument {
    fn from(nfa: &Nfa) -> Self {
        let transitions = nfa
            .transitions()
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(source, row)| {
                let row = row
                    .iter()
                    .map(|(input, ends)| {
                        let symbol = match input {
                            Input::Literal(c) => c.to_string(),
                            Input::Eps => "ε".to_string(),
                        };
                        let destination = match (ends.len(), ends.first()) {
                            (1, Some(end)) => Destination::Single(state_label(*end)),
                            _ => Destination::Multiple(labels(ends)),
                        };
                        (symbol, destination)
                    })
                    .collect();
                (state_label(*source), row)
            })
            .collect::<BTreeMap<_, _>>();

        Self {
            accept: labels(nfa.final_states()),
            start: state_label(nfa.start_state()),
            states: labels(&nfa.states()),
            transitions: (!transitions.is_empty()).then_some(transitions),
        }
    }
}

impl From<&Dfa> for AutomatonDocument {
    fn from(dfa: &Dfa) -> Self {
        let transitions = dfa
            .transitions()
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(source, row)| {
                let row = row
                    .iter()
                    .map(|(symbol, end)| {
                        (symbol.to_string(), Destination::Single(state_label(*end)))
                    })
                    .collect();
                (state_label(*source), row)
            })
            .collect::<BTreeMap<_, _>>();

        Self {
            accept: labels(dfa.final_states()),
            start: state_label(dfa.start_state()),
            states: labels(&dfa.states()),
            transitions: (!transitions.is_empty()).then_some(transitions),
        }
    }
}
