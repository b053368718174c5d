use crate::*;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Single-observer solver: one tree, whoever is to move.
pub type SoSolver<G, X = Sequential, P = Ucb1> = Solver<G, Single, X, P>;
/// Multi-observer solver: one tree per seat.
pub type MoSolver<G, X = Sequential, P = Ucb1> = Solver<G, Multi, X, P>;

/// Chooses moves by Information Set Monte Carlo Tree Search.
///
/// Generic over the game, the observer [`Scope`], the [`Execution`]
/// strategy and the [`TreePolicy`]; all three strategies are resolved at
/// compile time.
///
/// # Configuration
///
/// - `new(budget)` — iteration count or wall-clock duration
/// - `with_execution(x)` — threading strategy and worker count
/// - `with_policy(p)` — child selection scheme
/// - `with_seed(s)` — reproducible worker generators
///
/// # Decisions
///
/// - `search(&root)` — full result without touching the solver
/// - `choose(&root)` — the move, keeping the trees for `trees()`
///
/// The root state is never mutated; each iteration works on its own
/// determinization.
pub struct Solver<G, S = Single, X = Sequential, P = Ucb1>
where
    G: Game,
    S: Scope<G>,
    X: Execution,
    P: TreePolicy,
{
    budget: Budget,
    execution: X,
    policy: P,
    seed: Option<u64>,
    trees: Vec<Forest<G::M>>,
    scope: std::marker::PhantomData<S>,
}

/// Outcome of searching one root state.
pub struct Search<M>
where
    M: Move,
{
    choice: M,
    decision: Decision<M>,
    forests: Vec<Forest<M>>,
    metrics: Metrics,
}

impl<M> Search<M>
where
    M: Move,
{
    /// The chosen move, legal in the searched state.
    pub fn choice(&self) -> M {
        self.choice
    }
    /// Root statistics merged over the deciding trees.
    pub fn decision(&self) -> &Decision<M> {
        &self.decision
    }
    pub fn forests(&self) -> &[Forest<M>] {
        &self.forests
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
    pub fn into_forests(self) -> Vec<Forest<M>> {
        self.forests
    }
}

impl<G, S, X, P> Default for Solver<G, S, X, P>
where
    G: Game,
    S: Scope<G>,
    X: Execution,
    P: TreePolicy,
{
    /// Budget from the environment, else the default iteration count.
    fn default() -> Self {
        Self::new(Budget::from_env().unwrap_or_default())
    }
}

impl<G, S, X, P> Solver<G, S, X, P>
where
    G: Game,
    S: Scope<G>,
    X: Execution,
    P: TreePolicy,
{
    pub fn new(budget: impl Into<Budget>) -> Self {
        let budget = budget.into();
        assert!(budget.is_positive(), "search budget must be positive");
        Self {
            budget,
            execution: X::default(),
            policy: P::default(),
            seed: None,
            trees: Vec::new(),
            scope: std::marker::PhantomData,
        }
    }
    pub fn with_execution(mut self, execution: X) -> Self {
        self.execution = execution;
        self
    }
    pub fn with_policy(mut self, policy: P) -> Self {
        self.policy = policy;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }
    /// Iterations per decision, zero when searching by time.
    pub fn iteration_count(&self) -> usize {
        self.budget.count()
    }
    /// Search time per decision, zero when searching by count.
    pub fn iteration_time(&self) -> Duration {
        self.budget.time()
    }
    /// Switch to a count budget.
    pub fn set_iteration_count(&mut self, count: usize) {
        assert!(count > 0, "iteration count must be positive");
        self.budget = Budget::Count(count);
    }
    /// Switch to a time budget.
    pub fn set_iteration_time(&mut self, time: Duration) {
        assert!(!time.is_zero(), "iteration time must be positive");
        self.budget = Budget::Time(time);
    }
    pub fn threads(&self) -> usize {
        self.execution.threads()
    }
    pub fn policy(&self) -> &P {
        &self.policy
    }
    /// Trees grown by the latest `choose`.
    pub fn trees(&self) -> &[Forest<G::M>] {
        &self.trees
    }

    /// Search `root` and return the choice along with everything grown.
    pub fn search(&self, root: &G) -> Search<G::M> {
        assert!(!root.is_terminal(), "cannot search a finished game");
        let metrics = Metrics::default();
        let observers = S::observers(root);
        let decisive = S::observer(root.current_player());
        log::debug!(
            "searching {} over {} trees with {} workers",
            self.budget,
            observers,
            self.threads()
        );
        let forests = self
            .execution
            .execute::<G::M, _>(self.budget, observers, self.seed, |grove, rng| {
                Iteration::<G, S, P>::run(root, grove, &self.policy, rng);
                metrics.inc_iterations();
            });
        forests.iter().for_each(|forest| metrics.add_nodes(forest.n()));
        let decision = Decision::merge(forests.iter().map(|forest| forest.tree(decisive).root()));
        let legal = root.valid_moves();
        let choice = match decision.best(&legal) {
            Some(choice) => choice,
            None => {
                log::warn!("no root statistics, choosing at random");
                *legal
                    .choose(&mut generator(self.seed, 0))
                    .expect("unfinished games have legal moves")
            }
        };
        log::debug!("chose {:?} | {}", choice, metrics);
        Search {
            choice,
            decision,
            forests,
            metrics,
        }
    }
    /// Search `root`, keep the trees, and return the move.
    pub fn choose(&mut self, root: &G) -> G::M {
        let search = self.search(root);
        let choice = search.choice();
        self.trees = search.into_forests();
        choice
    }
}
