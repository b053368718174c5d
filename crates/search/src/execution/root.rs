use super::*;

/// Root parallelization: every worker grows its own grove.
///
/// Count budgets are split so worker shares differ by at most one and sum
/// to the total. Time budgets give every worker the full duration. The
/// groves never interact, so their root statistics can be merged in any
/// order afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RootParallel {
    threads: usize,
}

impl RootParallel {
    pub fn new(threads: usize) -> Self {
        assert!(threads > 0, "root parallel search needs a worker");
        Self { threads }
    }
}

impl Default for RootParallel {
    fn default() -> Self {
        Self::new(ismcts_core::threads())
    }
}

impl Execution for RootParallel {
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
        (0..self.threads)
            .into_par_iter()
            .map(|worker| {
                let grove = Grove::new(observers);
                let ref mut rng = generator(seed, worker);
                let share = budget.split(self.threads, worker);
                log::trace!("worker {} searching {}", worker, share);
                drive(share, &grove, rng, &work);
                grove.into_forest()
            })
            .collect::<Vec<_>>()
    }
}
