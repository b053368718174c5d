//! The game contract consumed by the search engine.
//!
//! - Move types (edge labels and returned decisions)
//! - Game state (current player, legal moves, transitions, determinization, payoffs)
//! - Partially observable games that expose their player seats

mod game;
mod moves;
mod pom;

pub use game::*;
pub use moves::*;
pub use pom::*;
