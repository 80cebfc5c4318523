use super::super::{StateId, StateSet};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// NFA finite-state machine.
///
/// There is no separate list of states: every state referenced by the
/// transitions, the start state or the final states is part of the NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// Input symbols used by the transitions (epsilon excluded).
    pub(super) alphabet: BTreeSet<char>,
    pub(super) start_state: StateId,
    pub(super) final_states: StateSet,
    pub(super) transitions: Transitions,
}

/// Transitions from a state, per input, to a set of destination states.
pub type Transitions = BTreeMap<StateId, BTreeMap<Input, StateSet>>;

/// Input on which an NFA transition can be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    /// Regular input to the NFA.
    Literal(char),
    /// Epsilon input, meaning no input needed (the transition can be made at
    /// any time).
    Eps,
}

impl Nfa {
    /// Creates an NFA without transitions.
    pub(super) fn new(start_state: StateId, final_states: StateSet) -> Self {
        Self {
            alphabet: BTreeSet::new(),
            start_state,
            final_states,
            transitions: Transitions::new(),
        }
    }

    /// Creates the two state NFA `start --c--> end`.
    pub(super) fn literal(start: StateId, end: StateId, c: char) -> Self {
        let mut nfa = Self::new(start, StateSet::from([end]));
        nfa.add_transition(start, Input::Literal(c), [end]);
        nfa
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

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// Returns all states of the NFA in ascending order.
    pub fn states(&self) -> StateSet {
        let mut states = StateSet::from([self.start_state]);
        states.extend(&self.final_states);

        for (source, row) in &self.transitions {
            states.insert(*source);
            states.extend(row.values().flatten());
        }

        states
    }

    /// Returns the destinations of `state` on `input`, if any.
    pub fn destinations(&self, state: StateId, input: Input) -> Option<&StateSet> {
        self.transitions.get(&state)?.get(&input)
    }

    /// Adds transitions from `start` to every state in `ends` on `input`.
    /// Destinations already present are kept.
    pub(super) fn add_transition(
        &mut self,
        start: StateId,
        input: Input,
        ends: impl IntoIterator<Item = StateId>,
    ) {
        if let Input::Literal(c) = input {
            self.alphabet.insert(c);
        }

        self.transitions
            .entry(start)
            .or_default()
            .entry(input)
            .or_default()
            .extend(ends);
    }

    /// Renumbers every state by `offset`. Sources, destinations, the start
    /// state and the final states move together.
    pub(super) fn shift_states(&mut self, offset: StateId) {
        let shift = |states: &StateSet| states.iter().map(|s| s + offset).collect::<StateSet>();

        self.transitions = std::mem::take(&mut self.transitions)
            .into_iter()
            .map(|(source, row)| {
                let row = row
                    .into_iter()
                    .map(|(input, ends)| (input, shift(&ends)))
                    .collect();
                (source + offset, row)
            })
            .collect();
        self.start_state += offset;
        self.final_states = shift(&self.final_states);
    }

    /// Merges the transitions and the alphabet of `other` into `self`. The
    /// start and final states of `self` are left untouched.
    pub(super) fn merge(&mut self, other: Nfa) {
        for (source, row) in other.transitions {
            for (input, ends) in row {
                self.add_transition(source, input, ends);
            }
        }

        self.alphabet.extend(other.alphabet);
    }

    /// Returns the states reachable from `state` using only epsilon
    /// transitions, `state` included.
    pub fn eps_closure_state(&self, state: StateId) -> StateSet {
        self.eps_closure(&StateSet::from([state]))
    }

    /// Returns the union of the epsilon closures of the given states.
    pub fn eps_closure(&self, states: &StateSet) -> StateSet {
        let mut not_visited = states.iter().copied().collect::<VecDeque<_>>();
        let mut result = states.clone();

        while let Some(state_id) = not_visited.pop_front() {
            let Some(ends) = self.destinations(state_id, Input::Eps) else {
                continue;
            };

            for end in ends {
                if result.insert(*end) {
                    not_visited.push_back(*end)
                }
            }
        }

        result
    }

    /// Returns the states directly reachable from any state in `states` on
    /// `symbol`. Epsilon transitions are not followed.
    pub fn move_on(&self, states: &StateSet, symbol: char) -> StateSet {
        states
            .iter()
            .filter_map(|state| self.destinations(*state, Input::Literal(symbol)))
            .flatten()
            .copied()
            .collect()
    }

    /// Whether any of the given states is final.
    pub fn contains_final(&self, states: &StateSet) -> bool {
        !self.final_states.is_disjoint(states)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Literal(c) => write!(f, "{}", c),
            Input::Eps => write!(f, "ε"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Input, Nfa, StateSet};

    /// `0 -a-> 1 -ε-> 2 -ε-> 3 -ε-> 1`, `2 -b-> 4`
    fn cyclic() -> Nfa {
        let mut nfa = Nfa::literal(0, 1, 'a');
        nfa.add_transition(1, Input::Eps, [2]);
        nfa.add_transition(2, Input::Eps, [3]);
        nfa.add_transition(3, Input::Eps, [1]);
        nfa.add_transition(2, Input::Literal('b'), [4]);
        nfa.final_states = StateSet::from([4]);
        nfa
    }

    #[test]
    fn eps_closure_with_cycle() {
        let nfa = cyclic();

        assert_eq!(nfa.eps_closure_state(0), StateSet::from([0]));
        assert_eq!(nfa.eps_closure_state(1), StateSet::from([1, 2, 3]));
        assert_eq!(nfa.eps_closure_state(3), StateSet::from([1, 2, 3]));
        assert_eq!(
            nfa.eps_closure(&StateSet::from([0, 2])),
            StateSet::from([0, 1, 2, 3])
        );
    }

    #[test]
    fn move_does_not_follow_eps() {
        let nfa = cyclic();

        assert_eq!(nfa.move_on(&StateSet::from([0]), 'a'), StateSet::from([1]));
        assert_eq!(nfa.move_on(&StateSet::from([1]), 'b'), StateSet::new());
        assert_eq!(
            nfa.move_on(&StateSet::from([0, 2]), 'b'),
            StateSet::from([4])
        );
    }

    #[test]
    fn states_and_alphabet() {
        let nfa = cyclic();

        assert_eq!(nfa.states(), StateSet::from([0, 1, 2, 3, 4]));
        assert_eq!(nfa.alphabet().iter().collect::<String>(), "ab");
    }

    #[test]
    fn shift_states() {
        let mut nfa = cyclic();
        nfa.shift_states(10);

        assert_eq!(nfa.start_state(), 10);
        assert_eq!(nfa.final_states(), &StateSet::from([14]));
        assert_eq!(
            nfa.destinations(10, Input::Literal('a')),
            Some(&StateSet::from([11]))
        );
        assert_eq!(
            nfa.destinations(13, Input::Eps),
            Some(&StateSet::from([11]))
        );
        assert_eq!(nfa.destinations(0, Input::Literal('a')), None);
        assert_eq!(nfa.states(), StateSet::from([10, 11, 12, 13, 14]));
    }

    #[test]
    fn merge_unions_destinations() {
        let mut lhs = Nfa::literal(0, 1, 'a');
        let mut rhs = Nfa::literal(0, 2, 'a');
        rhs.add_transition(2, Input::Literal('c'), [3]);

        lhs.merge(rhs);

        assert_eq!(lhs.start_state(), 0);
        assert_eq!(lhs.final_states(), &StateSet::from([1]));
        assert_eq!(
            lhs.destinations(0, Input::Literal('a')),
            Some(&StateSet::from([1, 2]))
        );
        assert_eq!(lhs.alphabet().iter().collect::<String>(), "ac");
    }
}
