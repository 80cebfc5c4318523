pub use self::{
    compiler::Compiler,
    model::{Input, Nfa, Transitions as NfaTransitions},
    sim::NfaSimulator,
};

mod compiler;
mod dot;
mod model;
mod sim;
