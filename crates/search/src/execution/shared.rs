use super::*;

/// Tree parallelization: all workers grow one shared grove.
///
/// Count budgets are drawn one iteration at a time from a shared
/// [`Countdown`], so exactly the budgeted number of iterations runs no
/// matter how the scheduler interleaves workers. Time budgets run every
/// worker until the common deadline.
#[derive(Debug, Clone, Copy)]
pub struct TreeParallel {
    threads: usize,
}

impl TreeParallel {
    pub fn new(threads: usize) -> Self {
        assert!(threads > 0, "tree parallel search needs a worker");
        Self { threads }
    }
}

impl Default for TreeParallel {
    fn default() -> Self {
        Self::new(ismcts_core::threads())
    }
}

impl Execution for TreeParallel {
    fn threads(&self) -> usize {
        self.threads
    }
    fn execute<M, F>(&self, budget: Budget, observers: usize, seed: Option<u64>, work: F) -> Vec<Forest<M>>
    where
        M: Move,
        F: Fn(&Grove<M>, &mut SmallRng) + Sync,
    {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let grove = Grove::new(observers);
        let countdown = Countdown::new(budget.count());
        let deadline = Instant::now() + budget.time();
        (0..self.threads).into_par_iter().for_each(|worker| {
            let ref mut rng = generator(seed, worker);
            log::trace!("worker {} joined shared search", worker);
            match budget {
                Budget::Count(_) => {
                    while countdown.take(1) > 0 {
                        work(&grove, rng);
                    }
                }
                Budget::Time(_) => until(deadline, || work(&grove, rng)),
            }
        });
        vec![grove.into_forest()]
    }
}
