use crate::*;
use ismcts_core::Player;
use ismcts_core::Probability;
use ismcts_core::Utility;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Node weight stored in the tree arena.
///
/// Holds the seat that moved into this node (`None` at the root) and the
/// node's [`Stats`] behind a mutex of its own. Workers sharing a tree only
/// need a read lock on the tree to update statistics, so concurrent
/// backpropagation through disjoint or overlapping paths stays consistent
/// per node.
#[derive(Debug, Default)]
pub struct Tally {
    player: Option<Player>,
    stats: Mutex<Stats>,
}

impl Tally {
    pub fn root() -> Self {
        Self::default()
    }
    pub fn child(player: Player) -> Self {
        Self {
            player: Some(player),
            stats: Mutex::new(Stats::default()),
        }
    }
    /// The seat credited with rewards at this node.
    pub fn player(&self) -> Option<Player> {
        self.player
    }
    /// Consistent snapshot of the counters.
    pub fn stats(&self) -> Stats {
        *self.lock()
    }
    /// Count a finished simulation, crediting the owner via `payoff`.
    pub(crate) fn update<F>(&self, payoff: F)
    where
        F: FnOnce(Player) -> Utility,
    {
        let reward = self.player.map(payoff);
        self.lock().update(reward);
    }
    pub(crate) fn mark(&self) {
        self.lock().mark();
    }
    pub(crate) fn weigh(&self, probability: Probability) {
        self.lock().weigh(probability);
    }
    fn lock(&self) -> MutexGuard<'_, Stats> {
        self.stats.lock().expect("node statistics poisoned")
    }
}
