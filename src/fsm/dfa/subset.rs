use super::{
    super::{nfa::Nfa, StateId, StateSet},
    model::Dfa,
};
use std::collections::{HashMap, VecDeque};

/// Converts an NFA into a DFA using the subset construction.
///
/// Every DFA state stands for the epsilon closed set of NFA states the NFA can
/// be in. DFA ids are handed out in the order the sets are discovered (breadth
/// first, symbols in ascending order), the start set gets id 0. Sets that are
/// empty are not turned into states, so the transition function stays partial.
pub fn determinize(nfa: &Nfa) -> Dfa {
    subset_construction(nfa).0
}

/// Same as [`determinize`], but also returns the set of NFA states every DFA
/// state stands for, indexed by DFA id.
pub(crate) fn subset_construction(nfa: &Nfa) -> (Dfa, Vec<StateSet>) {
    let mut dfa = Dfa::new(nfa.alphabet().clone(), 0);

    let start = nfa.eps_closure_state(nfa.start_state());
    let mut ids: HashMap<StateSet, StateId> = HashMap::from([(start.clone(), 0)]);
    let mut sets = vec![start];
    let mut unmarked = VecDeque::from([0]);

    while let Some(id) = unmarked.pop_front() {
        let states = sets[id].clone();

        if nfa.contains_final(&states) {
            dfa.add_final_state(id);
        }

        for symbol in nfa.alphabet() {
            let next = nfa.eps_closure(&nfa.move_on(&states, *symbol));
            if next.is_empty() {
                continue;
            }

            let next_id = match ids.get(&next) {
                Some(next_id) => *next_id,
                None => {
                    let next_id = sets.len();
                    ids.insert(next.clone(), next_id);
                    sets.push(next);
                    unmarked.push_back(next_id);
                    next_id
                }
            };

            dfa.add_transition(id, *symbol, next_id);
        }
    }

    log::trace!(
        "subset construction turned {} NFA states into {} DFA states",
        nfa.states().len(),
        sets.len()
    );

    (dfa, sets)
}
