//! Observer scopes, move aggregation, and the solver.

mod decision;
mod scope;
#[allow(clippy::module_inception)]
mod solver;

pub use decision::*;
pub use scope::*;
pub use solver::*;
