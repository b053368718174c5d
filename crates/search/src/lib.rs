//! Game-agnostic Information Set Monte Carlo Tree Search.
//!
//! This crate contains the generic traits and types that define ISMCTS
//! independently of any specific game implementation.
//!
//! # Module Structure
//!
//! - `state` — Game contract (Move, Game, PomGame)
//! - `tree` — Arena search trees (Stats, Tally, Node, Tree, Forest)
//! - `policy` — Child selection schemes (Ucb1, SubsetUcb, Exp3)
//! - `search` — One select/expand/simulate/backpropagate iteration
//! - `execution` — Budgets and threading strategies
//! - `solver` — Observer scopes, move aggregation, and the Solver
//! - `metrics` — Search observability
//! - `games` — Reference games (Mnk, Phantom, Goofspiel)

mod execution;
mod games;
mod metrics;
mod policy;
mod search;
mod solver;
mod state;
mod tree;

pub use execution::*;
pub use games::*;
pub use metrics::*;
pub use policy::*;
pub use search::*;
pub use solver::*;
pub use state::*;
pub use tree::*;
