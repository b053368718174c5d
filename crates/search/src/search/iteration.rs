use crate::*;
use rand::seq::IndexedRandom;

/// One ISMCTS iteration over a grove of trees.
///
/// Owns a fresh determinization of the root state and the path walked so
/// far. The four phases run in order:
///
/// - `select` — follow the policy while every legal move already has a child
/// - `expand` — add one untried legal move
/// - `simulate` — uniform random playout to the end of the game
/// - `backpropagate` — credit the outcome along the path in every tree
///
/// Every tree descends along each move played in the tree phases, creating
/// the child if it is missing, so all trees stay aligned with the path.
/// Which tree picks a move is up to the [`Scope`].
pub struct Iteration<'grove, G, S, P>
where
    G: Game,
    S: Scope<G>,
    P: TreePolicy,
{
    grove: &'grove Grove<G::M>,
    policy: &'grove P,
    state: G,
    path: Path,
    scope: std::marker::PhantomData<S>,
}

impl<'grove, G, S, P> Iteration<'grove, G, S, P>
where
    G: Game,
    S: Scope<G>,
    P: TreePolicy,
{
    /// Determinize `root` for its current player and stand at the roots.
    pub fn new<R>(root: &G, grove: &'grove Grove<G::M>, policy: &'grove P, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        Self {
            grove,
            policy,
            state: root.determinize(root.current_player(), rng),
            path: Path::new(grove.len()),
            scope: std::marker::PhantomData,
        }
    }
    /// Run all four phases.
    pub fn run<R>(root: &G, grove: &'grove Grove<G::M>, policy: &'grove P, rng: &mut R) -> Path
    where
        R: rand::Rng + ?Sized,
    {
        let mut iteration = Self::new(root, grove, policy, rng);
        iteration.select(rng);
        iteration.expand(rng);
        iteration.simulate(rng);
        iteration.backpropagate()
    }
    pub fn state(&self) -> &G {
        &self.state
    }
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn select<R>(&mut self, rng: &mut R)
    where
        R: rand::Rng + ?Sized,
    {
        while let Some(m) = self.pick(rng) {
            self.descend(m);
        }
    }
    pub fn expand<R>(&mut self, rng: &mut R)
    where
        R: rand::Rng + ?Sized,
    {
        let legal = self.state.valid_moves();
        if legal.is_empty() {
            return;
        }
        let driver = S::observer(self.state.current_player());
        let untried = self
            .grove
            .read(driver)
            .at(self.path.tip(driver))
            .untried(&legal);
        if let Some(m) = untried.choose(rng).copied() {
            self.descend(m);
        }
    }
    pub fn simulate<R>(&mut self, rng: &mut R)
    where
        R: rand::Rng + ?Sized,
    {
        while let Some(m) = self.state.valid_moves().choose(rng).copied() {
            self.state.do_move(m);
        }
    }
    pub fn backpropagate(self) -> Path {
        for tree in 0..self.path.width() {
            let guard = self.grove.read(tree);
            for index in self.path.nodes(tree) {
                guard
                    .at(*index)
                    .tally()
                    .update(|player| self.state.payoff(player));
            }
        }
        self.path
    }

    /// The policy's move at the driving tree's tip, or None when selection
    /// should stop: the game is over, or some legal move has no child yet.
    fn pick<R>(&self, rng: &mut R) -> Option<G::M>
    where
        R: rand::Rng + ?Sized,
    {
        let legal = self.state.valid_moves();
        if legal.is_empty() {
            return None;
        }
        let driver = S::observer(self.state.current_player());
        let tree = self.grove.read(driver);
        let node = tree.at(self.path.tip(driver));
        if !node.untried(&legal).is_empty() {
            return None;
        }
        let candidates = node.candidates(&legal);
        candidates.iter().for_each(|child| child.tally().mark());
        let choice = self.policy.choose(&node, &candidates, rng);
        candidates.get(choice).and_then(Node::incoming)
    }
    /// Play `m`, stepping every tree into the matching child.
    fn descend(&mut self, m: G::M) {
        let player = self.state.current_player();
        for tree in 0..self.path.width() {
            let tip = self.path.tip(tree);
            let found = self.grove.read(tree).at(tip).follow(&m).map(|n| n.index());
            let child = match found {
                Some(child) => child,
                None => self.grove.write(tree).grow(tip, m, player),
            };
            self.path.push(tree, child);
        }
        self.state.do_move(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn first_iteration_expands_root() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let root = Mnk::tictactoe();
        let grove = Grove::new(1);
        let path = Iteration::<_, Single, _>::run(&root, &grove, &Ucb1::default(), rng);
        assert_eq!(path.depth(), 1);
        let forest = grove.into_forest();
        let tree = forest.tree(0);
        assert_eq!(tree.n(), 2);
        assert_eq!(tree.visits(), 1);
        assert_eq!(tree.root().children()[0].visits(), 1);
        assert_eq!(tree.root().children()[0].player(), Some(0));
    }

    #[test]
    fn visits_account_for_every_iteration() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let root = Mnk::tictactoe();
        let grove = Grove::new(1);
        let policy = Ucb1::default();
        for _ in 0..200 {
            Iteration::<_, Single, _>::run(&root, &grove, &policy, rng);
        }
        let forest = grove.into_forest();
        let tree = forest.tree(0);
        assert_eq!(tree.visits(), 200);
        let sum = tree.root().children().iter().map(Node::visits).sum::<u32>();
        assert_eq!(sum, 200);
        assert_eq!(tree.root().width(), 9);
        for node in tree.all().filter(|n| n.width() > 0) {
            let below = node.children().iter().map(Node::visits).sum::<u32>();
            assert!(below <= node.visits());
        }
    }

    #[test]
    fn selection_stops_at_untried_moves() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let root = Mnk::tictactoe();
        let grove = Grove::new(1);
        let policy = Ucb1::default();
        for _ in 0..9 {
            let mut iteration = Iteration::<_, Single, _>::new(&root, &grove, &policy, rng);
            iteration.select(rng);
            assert_eq!(iteration.path().depth(), 0);
            iteration.expand(rng);
            iteration.simulate(rng);
            iteration.backpropagate();
        }
        let mut iteration = Iteration::<_, Single, _>::new(&root, &grove, &policy, rng);
        iteration.select(rng);
        assert_eq!(iteration.path().depth(), 1);
    }

    #[test]
    fn simulation_reaches_the_end() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let root = Mnk::tictactoe();
        let grove = Grove::new(1);
        let policy = Ucb1::default();
        let mut iteration = Iteration::<_, Single, _>::new(&root, &grove, &policy, rng);
        iteration.simulate(rng);
        assert!(iteration.state().is_terminal());
        assert_eq!(root, Mnk::tictactoe());
    }

    #[test]
    fn terminal_state_only_counts_root() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let x = Some(0);
        let root = Mnk::with_board(3, 3, 3, vec![x, x, x, Some(1), Some(1), None, None, None, None], 1);
        let grove = Grove::new(1);
        let path = Iteration::<_, Single, _>::run(&root, &grove, &Ucb1::default(), rng);
        assert_eq!(path.depth(), 0);
        let forest = grove.into_forest();
        assert_eq!(forest.tree(0).n(), 1);
        assert_eq!(forest.tree(0).visits(), 1);
        assert_eq!(forest.tree(0).root().stats().score(), 0.);
    }

    #[test]
    fn observer_trees_stay_aligned() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut root = Phantom::tictactoe();
        root.do_move(4);
        let grove = Grove::new(2);
        let policy = Ucb1::default();
        for _ in 0..100 {
            let path = Iteration::<_, Multi, _>::run(&root, &grove, &policy, rng);
            assert_eq!(path.width(), 2);
            assert_eq!(path.nodes(0).len(), path.nodes(1).len());
        }
        let forest = grove.into_forest();
        assert_eq!(forest.tree(0).visits(), 100);
        assert_eq!(forest.tree(1).visits(), 100);
        for child in forest.tree(1).root().children() {
            assert_eq!(child.player(), Some(1));
        }
    }

    #[test]
    fn rewards_credit_the_mover() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let o = Some(1);
        let x = Some(0);
        let root = Mnk::with_board(3, 3, 3, vec![o, o, None, x, x, None, None, None, None], 1);
        let grove = Grove::new(1);
        let policy = Ucb1::default();
        for _ in 0..50 {
            Iteration::<_, Single, _>::run(&root, &grove, &policy, rng);
        }
        let forest = grove.into_forest();
        let tree = forest.tree(0);
        let win = tree.root().follow(&2).expect("winning move explored");
        assert_eq!(win.stats().mean(), 1.);
        assert_eq!(win.player(), Some(1));
    }
}
