//! Information Set Monte Carlo Tree Search for games with hidden information.
//!
//! This facade crate re-exports the ismcts crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and runtime utilities
//! - [`search`] — Game contract, search trees, policies, execution, and solvers
//!
//! ## Usage
//!
//! ```
//! use ismcts::*;
//!
//! let mut game = Mnk::tictactoe();
//! let mut solver: SoSolver<Mnk> = Solver::new(Budget::Count(200)).with_seed(1);
//! let m = solver.choose(&game);
//! assert!(game.valid_moves().contains(&m));
//! game.do_move(m);
//! ```

pub use ismcts_core   as core;
pub use ismcts_search as search;

// Re-export commonly used types at the root
pub use ismcts_core::*;
pub use ismcts_search::*;
