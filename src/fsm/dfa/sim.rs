use super::{
    super::{traits::Simulatable, Simulate, StateId},
    model::Dfa,
};

/// Status of a [`DfaSimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No input consumed and the start state is not final.
    Start,
    /// Input consumed, the current state is not final, but more input may still
    /// lead to a final state.
    Potential,
    /// The current state is final.
    Accept,
    /// The last input had no transition. Nothing but a reset leaves this
    /// status.
    Fail,
}

/// Runs a compiled [`Dfa`] over input, one symbol at a time.
///
/// The simulator only reads the DFA, the cursor (current state, status and
/// lexeme) is owned by the simulator.
#[derive(Debug, Clone)]
pub struct DfaSimulator<'a> {
    dfa: &'a Dfa,
    current: StateId,
    status: Status,
    /// Symbols consumed since the last reset.
    lexeme: String,
    /// Lexeme of the most recent acceptance since the last reset.
    accepted_lexeme: Option<String>,
}

impl<'a> DfaSimulator<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        let mut sim = Self {
            dfa,
            current: dfa.start_state(),
            status: Status::Start,
            lexeme: String::new(),
            accepted_lexeme: None,
        };
        sim.reset();
        sim
    }

    /// Restarts the run in the start state of the DFA.
    pub fn reset(&mut self) {
        self.current = self.dfa.start_state();
        self.lexeme.clear();

        if self.dfa.is_final(self.current) {
            self.status = Status::Accept;
            self.accepted_lexeme = Some(String::new());
        } else {
            self.status = Status::Start;
            self.accepted_lexeme = None;
        }
    }

    /// Moves on `symbol`. Without a transition the status becomes
    /// [`Status::Fail`] and the current state is kept. Does nothing once
    /// failed.
    pub fn advance(&mut self, symbol: char) -> Status {
        if self.status == Status::Fail {
            return self.status;
        }

        match self.dfa.next_state(self.current, symbol) {
            Some(next) => {
                self.current = next;
                self.lexeme.push(symbol);

                if self.dfa.is_final(next) {
                    self.status = Status::Accept;
                    self.accepted_lexeme = Some(self.lexeme.clone());
                } else {
                    self.status = Status::Potential;
                }
            }
            None => self.status = Status::Fail,
        }

        self.status
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Symbols consumed since the last reset.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the lexeme of the most recent acceptance since the last reset.
    pub fn accepted_lexeme(&self) -> Option<&str> {
        self.accepted_lexeme.as_deref()
    }

    /// Whether the run accepted at any point since the last reset.
    pub fn has_accepted(&self) -> bool {
        self.accepted_lexeme.is_some()
    }

    /// Whether the run is dead.
    pub fn is_dead(&self) -> bool {
        self.status == Status::Fail
    }
}

impl Simulatable for Dfa {
    type Simulator<'a> = DfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        DfaSimulator::new(self)
    }
}

impl Simulate for DfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.status == Status::Accept
    }

    fn feed(&mut self, input: char) -> bool {
        self.advance(input) == Status::Accept
    }

    fn can_feed(&self, input: char) -> bool {
        !self.is_dead() && self.dfa.next_state(self.current, input).is_some()
    }
}

impl Dfa {
    /// Returns the longest prefix of `input` the DFA accepts.
    pub fn longest_match(&self, input: &str) -> Option<String> {
        let mut sim = self.to_simulator();
        let mut longest = sim.accepted_lexeme().map(str::to_owned);

        for ch in input.chars() {
            match sim.advance(ch) {
                Status::Accept => longest = sim.accepted_lexeme().map(str::to_owned),
                Status::Fail => break,
                Status::Start | Status::Potential => (),
            }
        }

        longest
    }
}
