use super::{
    super::{traits::Simulatable, Simulate, StateSet},
    model::Nfa,
};

/// Simulates an [`Nfa`] by tracking every state it can be in at once.
pub struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    /// Epsilon closed set of states the NFA is currently in.
    current: StateSet,
}

impl<'a> NfaSimulator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            current: nfa.eps_closure_state(nfa.start_state()),
        }
    }

    /// Returns the states the NFA is currently in.
    pub fn current_states(&self) -> &StateSet {
        &self.current
    }
}

impl Simulatable for Nfa {
    type Simulator<'a> = NfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        NfaSimulator::new(self)
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.nfa.contains_final(&self.current)
    }

    fn feed(&mut self, input: char) -> bool {
        self.current = self
            .nfa
            .eps_closure(&self.nfa.move_on(&self.current, input));

        self.is_accepting()
    }

    fn can_feed(&self, input: char) -> bool {
        !self.nfa.move_on(&self.current, input).is_empty()
    }
}
