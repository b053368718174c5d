//! Reference games for exercising the engine.
//!
//! - `Mnk` — m,n,k-games (tic-tac-toe), perfect information
//! - `Phantom` — m,n,k-games with the opponent's stones hidden
//! - `Goofspiel` — simultaneous bidding with a hidden prize deck

mod goofspiel;
mod mnk;
mod phantom;

pub use goofspiel::*;
pub use mnk::*;
pub use phantom::*;
