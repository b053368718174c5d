use super::*;

/// All iterations on the calling thread, into a single grove.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Execution for Sequential {
    fn threads(&self) -> usize {
        1
    }
    fn execute<M, F>(&self, budget: Budget, observers: usize, seed: Option<u64>, work: F) -> Vec<Forest<M>>
    where
        M: Move,
        F: Fn(&Grove<M>, &mut SmallRng) + Sync,
    {
        let grove = Grove::new(observers);
        let ref mut rng = generator(seed, 0);
        drive(budget, &grove, rng, &work);
        vec![grove.into_forest()]
    }
}
