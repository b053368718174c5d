use crate::*;
use ismcts_core::Utility;
use std::collections::BTreeMap;

/// Merged statistics of one root move across trees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Arm {
    pub visits: u64,
    pub score: Utility,
}

/// Root statistics summed over every tree that decides for the root
/// player. Keyed by move in ascending order, so merging is independent
/// of the order trees arrive in.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<M>
where
    M: Move,
{
    arms: BTreeMap<M, Arm>,
}

impl<M> Default for Decision<M>
where
    M: Move,
{
    fn default() -> Self {
        Self {
            arms: BTreeMap::new(),
        }
    }
}

impl<M> Decision<M>
where
    M: Move,
{
    /// Sum the children of each root.
    pub fn merge<'tree, I>(roots: I) -> Self
    where
        M: 'tree,
        I: IntoIterator<Item = Node<'tree, M>>,
    {
        let mut decision = Self::default();
        for root in roots {
            decision.absorb(&root);
        }
        decision
    }
    pub fn absorb(&mut self, root: &Node<'_, M>) {
        for child in root.children() {
            let m = child.incoming().expect("children have incoming moves");
            let stats = child.stats();
            let arm = self.arms.entry(m).or_default();
            arm.visits += stats.visits() as u64;
            arm.score += stats.score();
        }
    }
    /// Most visited move among `legal`, smallest move on ties.
    pub fn best(&self, legal: &[M]) -> Option<M> {
        self.arms
            .iter()
            .filter(|(m, _)| legal.contains(m))
            .fold(None, |best: Option<(M, u64)>, (m, arm)| match best {
                Some((_, visits)) if visits >= arm.visits => best,
                _ => Some((*m, arm.visits)),
            })
            .map(|(m, _)| m)
    }
    pub fn get(&self, m: &M) -> Option<&Arm> {
        self.arms.get(m)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&M, &Arm)> {
        self.arms.iter()
    }
    /// Visits summed over all arms.
    pub fn visits(&self) -> u64 {
        self.arms.values().map(|arm| arm.visits).sum()
    }
    pub fn len(&self) -> usize {
        self.arms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<M> std::fmt::Display for Decision<M>
where
    M: Move,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (m, arm) in self.arms.iter() {
            writeln!(f, "{:>8} {:>8} {:>10.2}", format!("{:?}", m), arm.visits, arm.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(arms: &[(usize, Vec<Utility>)]) -> Tree<usize> {
        let mut tree = Tree::default();
        let root = tree.root().index();
        for (m, rewards) in arms {
            let child = tree.grow(root, *m, 0);
            for r in rewards {
                tree.at(child).tally().update(|_| *r);
            }
        }
        tree
    }

    #[test]
    fn most_visited_wins() {
        let t = tree(&[(0, vec![1., 1.]), (1, vec![0., 0., 0.])]);
        let decision = Decision::merge([t.root()]);
        assert_eq!(decision.best(&[0, 1]), Some(1));
        assert_eq!(decision.visits(), 5);
    }

    #[test]
    fn ties_go_to_smallest_move() {
        let t = tree(&[(4, vec![1.]), (2, vec![0.]), (3, vec![0.5])]);
        let decision = Decision::merge([t.root()]);
        assert_eq!(decision.best(&[2, 3, 4]), Some(2));
        assert_eq!(decision.best(&[3, 4]), Some(3));
    }

    #[test]
    fn illegal_moves_ignored() {
        let t = tree(&[(0, vec![1., 1., 1.]), (1, vec![0.])]);
        let decision = Decision::merge([t.root()]);
        assert_eq!(decision.best(&[1, 2]), Some(1));
        assert_eq!(decision.best(&[2]), None);
    }

    #[test]
    fn merge_order_irrelevant() {
        let a = tree(&[(0, vec![1., 0.5]), (1, vec![0.])]);
        let b = tree(&[(1, vec![1., 1.]), (2, vec![0.5])]);
        let c = tree(&[(2, vec![0., 0., 1.]), (0, vec![0.5])]);
        let abc = Decision::merge([a.root(), b.root(), c.root()]);
        let cab = Decision::merge([c.root(), a.root(), b.root()]);
        let bca = Decision::merge([b.root(), c.root(), a.root()]);
        assert_eq!(abc, cab);
        assert_eq!(abc, bca);
        assert_eq!(abc.get(&0), Some(&Arm { visits: 3, score: 2. }));
        assert_eq!(abc.get(&1), Some(&Arm { visits: 3, score: 2. }));
        assert_eq!(abc.get(&2), Some(&Arm { visits: 4, score: 1.5 }));
    }
}
