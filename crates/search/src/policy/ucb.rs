//! UCB1 selection.

use super::*;

/// UCB1 over the parent's visit count.
///
/// `score / visits + C * sqrt(ln(parent visits) / visits)`. Unvisited
/// children are always preferred.
#[derive(Debug, Clone, Copy)]
pub struct Ucb1 {
    exploration: Utility,
}

impl Ucb1 {
    /// Negative exploration is clamped to zero.
    pub fn new(exploration: Utility) -> Self {
        Self {
            exploration: exploration.max(0.),
        }
    }
    pub fn exploration(&self) -> Utility {
        self.exploration
    }
}

impl Default for Ucb1 {
    fn default() -> Self {
        Self::new(EXPLORATION)
    }
}

impl TreePolicy for Ucb1 {
    fn choose<M, R>(&self, parent: &Node<'_, M>, candidates: &[Node<'_, M>], _: &mut R) -> usize
    where
        M: Move,
        R: rand::Rng + ?Sized,
    {
        let total = parent.visits();
        argmax(
            candidates
                .iter()
                .map(|child| ucb(&child.stats(), self.exploration, total)),
        )
    }
}
