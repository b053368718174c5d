//! A single select/expand/simulate/backpropagate pass.

mod iteration;
mod path;

pub use iteration::*;
pub use path::*;
