use crate::*;
use ismcts_core::Player;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A search tree over one observer's information sets.
///
/// Internally wraps a petgraph `DiGraph`. Each vertex stores a [`Tally`],
/// each edge is labeled with the move that leads to the child. The root
/// is created with the tree and always lives at index 0.
///
/// # Growth
///
/// Trees only grow. `grow` is find-or-add: asking for an existing child
/// returns it instead of creating a duplicate, so at most one child exists
/// per distinct move under any parent. Indices are never invalidated.
///
/// # Traversal
///
/// - `root()` — Handle to the root node
/// - `at(index)` — Handle at a specific index
/// - `all()` — Iterate over all nodes
#[derive(Debug)]
pub struct Tree<M>
where
    M: Move,
{
    graph: DiGraph<Tally, M>,
}

impl<M> Default for Tree<M>
where
    M: Move,
{
    fn default() -> Self {
        let mut graph = DiGraph::default();
        graph.add_node(Tally::root());
        Self { graph }
    }
}

impl<M> Tree<M>
where
    M: Move,
{
    /// Number of nodes in the tree, root included.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    /// get the root Node
    pub fn root(&self) -> Node<'_, M> {
        self.at(NodeIndex::new(0))
    }
    /// get a Node by index
    pub fn at(&self, index: NodeIndex) -> Node<'_, M> {
        Node::from(index, &self.graph)
    }
    /// get all Nodes in the Tree
    pub fn all(&self) -> impl Iterator<Item = Node<'_, M>> {
        self.graph.node_indices().map(|n| self.at(n))
    }
    /// Child of `parent` along `edge`, created for `player` if missing.
    pub fn grow(&mut self, parent: NodeIndex, edge: M, player: Player) -> NodeIndex {
        match self.at(parent).follow(&edge) {
            Some(child) => child.index(),
            None => {
                let tail = self.graph.add_node(Tally::child(player));
                self.graph.add_edge(parent, tail, edge);
                tail
            }
        }
    }
    /// Visits recorded at the root.
    pub fn visits(&self) -> u32 {
        self.root().visits()
    }

    /// display the Tree in a human-readable format
    /// be careful because it's really big and recursive
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        if x == NodeIndex::new(0) {
            writeln!(f, "{}", self.at(x))?;
        }
        let children = self.at(x).children();
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}──{}", prefix, stem, child)?;
            self.show(f, child.index(), &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl<M> std::fmt::Display for Tree<M>
where
    M: Move,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, NodeIndex::new(0), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tree_has_root() {
        let tree = Tree::<usize>::default();
        assert_eq!(tree.n(), 1);
        assert!(tree.root().player().is_none());
        assert!(tree.root().parent().is_none());
        assert_eq!(tree.root().visits(), 0);
    }

    #[test]
    fn grow_is_find_or_add() {
        let mut tree = Tree::<usize>::default();
        let root = tree.root().index();
        let a = tree.grow(root, 4, 0);
        let b = tree.grow(root, 4, 0);
        assert_eq!(a, b);
        assert_eq!(tree.n(), 2);
        assert_eq!(tree.root().width(), 1);
    }

    #[test]
    fn children_in_creation_order() {
        let mut tree = Tree::<usize>::default();
        let root = tree.root().index();
        for m in [7, 2, 5] {
            tree.grow(root, m, 0);
        }
        assert_eq!(tree.root().outgoing(), vec![7, 2, 5]);
        let incoming = tree
            .root()
            .children()
            .iter()
            .filter_map(|c| c.incoming())
            .collect::<Vec<_>>();
        assert_eq!(incoming, vec![7, 2, 5]);
    }

    #[test]
    fn untried_and_candidates_follow_legality() {
        let mut tree = Tree::<usize>::default();
        let root = tree.root().index();
        tree.grow(root, 1, 0);
        tree.grow(root, 3, 0);
        let legal = [0, 1, 2];
        assert_eq!(tree.root().untried(&legal), vec![0, 2]);
        let candidates = tree.root().candidates(&legal);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].incoming(), Some(1));
    }

    #[test]
    fn upward_iteration_reaches_root() {
        let mut tree = Tree::<usize>::default();
        let root = tree.root().index();
        let a = tree.grow(root, 1, 0);
        let b = tree.grow(a, 2, 1);
        let c = tree.grow(b, 3, 0);
        let leaf = tree.at(c);
        assert_eq!(leaf.depth(), 3);
        assert_eq!(tree.root().height(), 3);
        let path = leaf.map(|(_, m)| m).collect::<Vec<_>>();
        assert_eq!(path, vec![3, 2, 1]);
        assert_eq!(tree.at(b).player(), Some(1));
    }

    #[test]
    fn display_renders_every_node() {
        let mut tree = Tree::<usize>::default();
        let root = tree.root().index();
        let a = tree.grow(root, 1, 0);
        tree.grow(a, 2, 1);
        tree.grow(root, 3, 0);
        let text = tree.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("[ROOT V: 0]"));
        assert!(text.contains("[M:2 by 1, V/S/A: 0/0.0/1]"));
    }
}
