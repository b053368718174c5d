//! EXP3 selection.

use super::*;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Exponential-weight bandit for simultaneous or adversarial choices.
///
/// Each legal child `i` out of `K` gets
///
/// ```text
/// gamma = min(1, sqrt(K ln K / (e - 1) / visits_i))
/// eta   = gamma / K
/// p_i   = eta + (1 - gamma) / sum_j exp(eta * (score_j - score_i))
/// ```
///
/// and one child is sampled in proportion to `p`. The probability is
/// stored on the child, so rewards credited to it later are divided by
/// it. Deterministic selection would be exploitable by an opponent that
/// moves at the same time, hence the sampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp3;

impl Exp3 {
    /// Selection weights of `candidates`, in order.
    pub fn probabilities<M>(candidates: &[Node<'_, M>]) -> Vec<Probability>
    where
        M: Move,
    {
        let k = candidates.len() as Probability;
        let stats = candidates.iter().map(Node::stats).collect::<Vec<_>>();
        stats
            .iter()
            .map(|own| {
                let gamma = match own.visits() {
                    0 => 1.,
                    n => (k * k.ln() / Probability::exp_m1(1.) / n as Probability)
                        .sqrt()
                        .min(1.),
                };
                let eta = gamma / k;
                let sum = stats
                    .iter()
                    .map(|other| (eta * (other.score() - own.score())).exp())
                    .sum::<Probability>();
                eta + (1. - gamma) / sum
            })
            .collect()
    }
}

impl TreePolicy for Exp3 {
    fn choose<M, R>(&self, _: &Node<'_, M>, candidates: &[Node<'_, M>], rng: &mut R) -> usize
    where
        M: Move,
        R: rand::Rng + ?Sized,
    {
        let weights = Self::probabilities(candidates);
        for (child, p) in candidates.iter().zip(weights.iter()) {
            child.tally().weigh(*p);
        }
        match WeightedIndex::new(&weights) {
            Ok(dist) => dist.sample(rng),
            Err(e) => {
                log::warn!("degenerate exp3 weights ({}), sampling uniformly", e);
                rng.random_range(0..candidates.len())
            }
        }
    }
}
