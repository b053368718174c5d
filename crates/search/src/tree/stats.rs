use ismcts_core::POLICY_MIN;
use ismcts_core::Probability;
use ismcts_core::Utility;

/// Counters accumulated at a single tree node.
///
/// - `visits` — simulations that passed through the node
/// - `score` — reward credited to the player who moved into the node
/// - `available` — selections at which the node was a legal candidate
/// - `probability` — latest selection probability from a stochastic policy
///
/// Rewards are divided by `probability` when credited, so deterministic
/// policies (which never touch it) accumulate plain sums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    visits: u32,
    score: Utility,
    available: u32,
    probability: Probability,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            visits: 0,
            score: 0.,
            available: 1,
            probability: 1.,
        }
    }
}

impl Stats {
    pub fn visits(&self) -> u32 {
        self.visits
    }
    pub fn score(&self) -> Utility {
        self.score
    }
    pub fn available(&self) -> u32 {
        self.available
    }
    pub fn probability(&self) -> Probability {
        self.probability
    }
    /// Average credited reward, zero before the first visit.
    pub fn mean(&self) -> Utility {
        match self.visits {
            0 => 0.,
            n => self.score / n as Utility,
        }
    }
    /// Count one simulation, crediting `reward` if the node has an owner.
    pub(crate) fn update(&mut self, reward: Option<Utility>) {
        self.visits += 1;
        if let Some(reward) = reward {
            self.score += reward / self.probability.max(POLICY_MIN);
        }
    }
    pub(crate) fn mark(&mut self) {
        self.available += 1;
    }
    pub(crate) fn weigh(&mut self, probability: Probability) {
        self.probability = probability;
    }
}
