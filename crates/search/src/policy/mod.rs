//! Child selection schemes.

mod exp3;
mod subset;
mod ucb;

pub use exp3::*;
pub use subset::*;
pub use ucb::*;

use crate::*;
use ismcts_core::*;

/// Trait for choosing which child to descend into during selection.
///
/// `candidates` are the children of `parent` whose move is legal in the
/// current determinization, in creation order, never empty. They have
/// already been marked available for this selection. Returns an index
/// into `candidates`.
pub trait TreePolicy: Default + Send + Sync {
    fn choose<M, R>(&self, parent: &Node<'_, M>, candidates: &[Node<'_, M>], rng: &mut R) -> usize
    where
        M: Move,
        R: rand::Rng + ?Sized;
}

/// Index of the highest score, earliest on ties. NaN never wins.
fn argmax<I>(scores: I) -> usize
where
    I: IntoIterator<Item = Utility>,
{
    scores
        .into_iter()
        .map(|s| if s.is_nan() { Utility::NEG_INFINITY } else { s })
        .enumerate()
        .fold((0, Utility::NEG_INFINITY), |(best, high), (i, s)| {
            if s > high { (i, s) } else { (best, high) }
        })
        .0
}

/// Upper confidence bound with an arbitrary count in the log term.
fn ucb(stats: &Stats, exploration: Utility, count: u32) -> Utility {
    match stats.visits() {
        0 => Utility::INFINITY,
        n => {
            let n = n as Utility;
            let log = (count.max(1) as Utility).ln();
            stats.score() / n + exploration * (log / n).sqrt()
        }
    }
}
