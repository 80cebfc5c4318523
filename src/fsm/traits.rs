/// Finite-state machine which can hand out simulators over itself.
///
/// A simulator only borrows the machine, so any number of simulations can run
/// over the same compiled machine at once.
pub trait Simulatable {
    type Simulator<'a>: Simulate
    where
        Self: 'a;

    /// Creates a simulator in the start configuration of the machine.
    fn to_simulator(&self) -> Self::Simulator<'_>;

    /// Whether the machine accepts the entire `input`.
    fn accepts(&self, input: &str) -> bool {
        self.to_simulator().run(input)
    }
}

pub trait Simulate {
    /// Simulates the finite-state machine from start to finish and returns whether it accepts the
    /// input.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        let accept = self.is_accepting();
        input.chars().map(|c| self.feed(c)).last().unwrap_or(accept)
    }

    /// Returns whether the finite-state machine is currently in an accepting configuration.
    fn is_accepting(&self) -> bool;

    /// Feeds a single character to the finite-state machine and returns whether it has reached an
    /// accepting state.
    fn feed(&mut self, input: char) -> bool;

    /// Whether feeding `input` keeps the machine alive.
    fn can_feed(&self, input: char) -> bool;

    /// Feeds an entire string to the finite-state machine at once and returns whether it has
    /// reached an accepting state. Feeding an empty string leaves the machine as it is.
    fn feed_str(&mut self, input: &str) -> bool {
        let accept = self.is_accepting();
        input.chars().map(|c| self.feed(c)).last().unwrap_or(accept)
    }
}
