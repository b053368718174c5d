//! Budgets and threading strategies.
//!
//! - `Sequential` — one worker, one grove
//! - `RootParallel` — one grove per worker, count budget split evenly
//! - `TreeParallel` — workers share one grove and draw from a countdown

mod budget;
mod countdown;
mod root;
mod sequential;
mod shared;

pub use budget::*;
pub use countdown::*;
pub use root::*;
pub use sequential::*;
pub use shared::*;

use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

/// Trait for scheduling search iterations over worker threads.
///
/// `work` runs exactly one iteration against a grove using the worker's
/// own generator. Implementations decide how many groves exist, who
/// shares them, and how the budget is divided, and return one finished
/// [`Forest`] per grove.
pub trait Execution: Default + Send + Sync {
    /// Number of workers.
    fn threads(&self) -> usize;
    fn execute<M, F>(&self, budget: Budget, observers: usize, seed: Option<u64>, work: F) -> Vec<Forest<M>>
    where
        M: Move,
        F: Fn(&Grove<M>, &mut SmallRng) + Sync;
}

/// Generator for worker `index`: reproducible when seeded, fresh otherwise.
pub(crate) fn generator(seed: Option<u64>, index: usize) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Run `work` until `budget` is spent on this worker alone.
pub(crate) fn drive<M, F>(budget: Budget, grove: &Grove<M>, rng: &mut SmallRng, work: &F)
where
    M: Move,
    F: Fn(&Grove<M>, &mut SmallRng),
{
    match budget {
        Budget::Count(n) => (0..n).for_each(|_| work(grove, rng)),
        Budget::Time(t) => until(Instant::now() + t, || work(grove, rng)),
    }
}

/// Repeat `work` while `deadline` is ahead. Nothing starts past it.
pub(crate) fn until<F>(deadline: Instant, mut work: F)
where
    F: FnMut(),
{
    while Instant::now() < deadline {
        work();
    }
}
