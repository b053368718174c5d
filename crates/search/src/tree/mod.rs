//! Search tree structures.
//!
//! - Stats: snapshot of one node's counters
//! - Tally: synchronized per-node statistics stored in the arena
//! - Node: lightweight handle for navigating a tree
//! - Tree: petgraph arena rooted at index 0
//! - Grove: lock-guarded trees shared by workers during a search
//! - Forest: the finished trees of one worker, one per observer

mod forest;
mod grove;
mod node;
mod stats;
mod tally;
#[allow(clippy::module_inception)]
mod tree;

pub use forest::*;
pub use grove::*;
pub use node::*;
pub use stats::*;
pub use tally::*;
pub use tree::*;
