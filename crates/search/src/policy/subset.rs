//! Subset-armed UCB selection.

use super::*;

/// UCB1 where the log term counts how often each child was available.
///
/// In imperfect-information trees a child is only selectable in the
/// determinizations where its move is legal, so its exploration bonus
/// grows with its own availability rather than the parent's visits.
#[derive(Debug, Clone, Copy)]
pub struct SubsetUcb {
    exploration: Utility,
}

impl SubsetUcb {
    pub fn new(exploration: Utility) -> Self {
        Self {
            exploration: exploration.max(0.),
        }
    }
    pub fn exploration(&self) -> Utility {
        self.exploration
    }
}

impl Default for SubsetUcb {
    fn default() -> Self {
        Self::new(EXPLORATION)
    }
}

impl TreePolicy for SubsetUcb {
    fn choose<M, R>(&self, _: &Node<'_, M>, candidates: &[Node<'_, M>], _: &mut R) -> usize
    where
        M: Move,
        R: rand::Rng + ?Sized,
    {
        argmax(candidates.iter().map(|child| {
            let stats = child.stats();
            ucb(&stats, self.exploration, stats.available())
        }))
    }
}
