pub use self::{
    model::Dfa,
    sim::{DfaSimulator, Status},
    subset::determinize,
};

#[cfg(test)]
pub(crate) use self::subset::subset_construction;

mod dot;
mod model;
mod sim;
mod subset;
