/// A move in the game tree.
///
/// Moves label the edges between tree nodes and are the value a solver
/// returns. They carry no identity beyond equality.
///
/// # Requirements
///
/// - Copyable for cheap path bookkeeping
/// - `Eq` for matching children against legal moves
/// - `Ord` for deterministic aggregation across trees
/// - `Send` + `Sync` for parallel execution
///
/// Any type meeting the bounds is a `Move`.
pub trait Move:
    Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Send + Sync + std::hash::Hash + std::fmt::Debug
{
}

impl<T> Move for T where
    T: Copy
        + Clone
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Send
        + Sync
        + std::hash::Hash
        + std::fmt::Debug
{
}
