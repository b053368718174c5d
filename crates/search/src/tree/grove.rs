use crate::*;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

/// Trees under construction, one per observer, shared by workers.
///
/// Topology sits behind a per-tree `RwLock`: selection and backpropagation
/// take read locks (statistics are synchronized per node by [`Tally`]),
/// expansion takes a write lock. A worker must release any read guard on a
/// tree before asking for its write guard.
#[derive(Debug)]
pub struct Grove<M>
where
    M: Move,
{
    trees: Vec<RwLock<Tree<M>>>,
}

impl<M> Grove<M>
where
    M: Move,
{
    /// A grove of fresh single-node trees.
    pub fn new(observers: usize) -> Self {
        assert!(observers > 0, "a search needs at least one tree");
        Self {
            trees: (0..observers).map(|_| RwLock::default()).collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.trees.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
    pub fn read(&self, tree: usize) -> RwLockReadGuard<'_, Tree<M>> {
        self.trees[tree].read().expect("search tree poisoned")
    }
    pub fn write(&self, tree: usize) -> RwLockWriteGuard<'_, Tree<M>> {
        self.trees[tree].write().expect("search tree poisoned")
    }
    /// Finished trees, once no worker holds a reference.
    pub fn into_forest(self) -> Forest<M> {
        Forest::from(
            self.trees
                .into_iter()
                .map(|lock| lock.into_inner().expect("search tree poisoned"))
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grove_grows_independently() {
        let grove = Grove::<usize>::new(2);
        let root = grove.read(0).root().index();
        grove.write(0).grow(root, 1, 0);
        grove.write(0).grow(root, 2, 0);
        grove.write(1).grow(root, 1, 0);
        let forest = grove.into_forest();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.tree(0).n(), 3);
        assert_eq!(forest.tree(1).n(), 2);
    }

    #[test]
    fn concurrent_growth_never_duplicates() {
        let grove = Grove::<usize>::new(1);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for m in 0..32 {
                        let root = grove.read(0).root().index();
                        grove.write(0).grow(root, m, 0);
                    }
                });
            }
        });
        let forest = grove.into_forest();
        assert_eq!(forest.tree(0).root().width(), 32);
    }
}
