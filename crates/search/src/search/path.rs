use petgraph::graph::NodeIndex;

/// The nodes one iteration passed through, per tree, root first.
///
/// Every tree descends along the same moves, so all paths have the same
/// length. Backpropagation folds over these indices; nodes need no parent
/// pointers for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Vec<NodeIndex>>);

impl Path {
    pub fn new(observers: usize) -> Self {
        Self(vec![vec![NodeIndex::new(0)]; observers])
    }
    /// Deepest node reached in `tree`.
    pub fn tip(&self, tree: usize) -> NodeIndex {
        *self.0[tree].last().expect("paths start at the root")
    }
    pub fn push(&mut self, tree: usize, index: NodeIndex) {
        self.0[tree].push(index);
    }
    pub fn nodes(&self, tree: usize) -> &[NodeIndex] {
        &self.0[tree]
    }
    /// Number of trees.
    pub fn width(&self) -> usize {
        self.0.len()
    }
    /// Number of moves descended.
    pub fn depth(&self) -> usize {
        self.0.first().map(|p| p.len() - 1).unwrap_or(0)
    }
}
