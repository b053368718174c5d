use crate::*;

/// The finished trees of one worker, indexed by observer.
///
/// A single-observer search produces a forest of one tree; the
/// multi-observer search produces one tree per seat.
#[derive(Debug)]
pub struct Forest<M>
where
    M: Move,
{
    trees: Vec<Tree<M>>,
}

impl<M> From<Vec<Tree<M>>> for Forest<M>
where
    M: Move,
{
    fn from(trees: Vec<Tree<M>>) -> Self {
        Self { trees }
    }
}

impl<M> Forest<M>
where
    M: Move,
{
    pub fn len(&self) -> usize {
        self.trees.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
    pub fn tree(&self, observer: usize) -> &Tree<M> {
        &self.trees[observer]
    }
    pub fn trees(&self) -> &[Tree<M>] {
        &self.trees
    }
    /// Total nodes across all trees.
    pub fn n(&self) -> usize {
        self.trees.iter().map(Tree::n).sum()
    }
}

impl<M> std::fmt::Display for Forest<M>
where
    M: Move,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tree) in self.trees.iter().enumerate() {
            writeln!(f, "TREE {}", i)?;
            write!(f, "{}", tree)?;
        }
        Ok(())
    }
}
