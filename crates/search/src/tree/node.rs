use crate::*;
use ismcts_core::Player;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// A lightweight handle to a node in a search tree.
///
/// Stores only an index and a reference to the underlying graph,
/// making nodes cheap to copy and pass around. Provides navigation
/// methods for tree traversal (parent, children, follow).
///
/// # Iterator Implementation
///
/// Implements `Iterator` for upward traversal: each `next()` yields
/// the parent node and the move taken out of it, enabling path
/// reconstruction from any node back to the root.
///
/// # Navigation
///
/// - `up()` — Parent node and incoming move
/// - `children()` — Direct child nodes, oldest first
/// - `follow(m)` — Child reached by playing a specific move
/// - `untried(legal)` — Legal moves without a child yet
/// - `candidates(legal)` — Children whose move is legal
#[derive(Copy, Clone)]
pub struct Node<'tree, M>
where
    M: Move,
{
    index: NodeIndex,
    graph: &'tree DiGraph<Tally, M>,
}

impl<'tree, M> Node<'tree, M>
where
    M: Move,
{
    /// Creates a node handle from an index and graph reference.
    pub fn from(index: NodeIndex, graph: &'tree DiGraph<Tally, M>) -> Self {
        Self { index, graph }
    }
    /// The petgraph index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    /// Reference to the underlying graph.
    pub fn graph(&self) -> &'tree DiGraph<Tally, M> {
        self.graph
    }
    /// The synchronized statistics of this node.
    pub fn tally(&self) -> &'tree Tally {
        &self.graph[self.index]
    }
    /// Snapshot of this node's counters.
    pub fn stats(&self) -> Stats {
        self.tally().stats()
    }
    pub fn visits(&self) -> u32 {
        self.stats().visits()
    }
    /// The seat that moved into this node (None at the root).
    pub fn player(&self) -> Option<Player> {
        self.tally().player()
    }
    /// Creates a node handle at a different index in the same tree.
    pub fn at(&self, index: NodeIndex) -> Node<'tree, M> {
        Self::from(index, self.graph)
    }
    /// Returns parent node and incoming move, if not at root.
    pub fn up(&self) -> Option<(Node<'tree, M>, M)> {
        match (self.parent(), self.incoming()) {
            (None, None) => None,
            (Some(parent), Some(incoming)) => Some((parent, incoming)),
            (Some(_), _) => unreachable!("tree property violation"),
            (_, Some(_)) => unreachable!("tree property violation"),
        }
    }
    /// Parent node (None if this is the root).
    pub fn parent(&self) -> Option<Node<'tree, M>> {
        self.graph
            .neighbors_directed(self.index, Direction::Incoming)
            .next()
            .map(|index| self.at(index))
    }
    /// The move played to reach this node from its parent.
    pub fn incoming(&self) -> Option<M> {
        self.graph
            .edges_directed(self.index, Direction::Incoming)
            .next()
            .map(|edge| *edge.weight())
    }
    /// All direct child nodes, in the order they were created.
    pub fn children(&self) -> Vec<Node<'tree, M>> {
        let mut children = self
            .graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .map(|index| self.at(index))
            .collect::<Vec<_>>();
        children.reverse();
        children
    }
    /// All outgoing moves, in the order their children were created.
    pub fn outgoing(&self) -> Vec<M> {
        let mut moves = self
            .graph
            .edges_directed(self.index, Direction::Outgoing)
            .map(|edge| *edge.weight())
            .collect::<Vec<_>>();
        moves.reverse();
        moves
    }
    /// Child reached by playing a specific move.
    pub fn follow(&self, m: &M) -> Option<Node<'tree, M>> {
        self.graph
            .edges_directed(self.index, Direction::Outgoing)
            .find(|edge| edge.weight() == m)
            .map(|edge| self.at(edge.target()))
    }
    /// Legal moves that have no child yet. Depends on the determinization
    /// that produced `legal`, so it is never cached.
    pub fn untried(&self, legal: &[M]) -> Vec<M> {
        let tried = self.outgoing();
        legal
            .iter()
            .filter(|m| !tried.contains(m))
            .copied()
            .collect()
    }
    /// Children whose move is legal in the current determinization.
    pub fn candidates(&self, legal: &[M]) -> Vec<Node<'tree, M>> {
        self.children()
            .into_iter()
            .filter(|child| child.incoming().is_some_and(|m| legal.contains(&m)))
            .collect()
    }
    /// Count of direct child nodes (no allocation).
    pub fn width(&self) -> usize {
        self.graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .count()
    }
    /// Number of moves between the root and this node.
    pub fn depth(&self) -> usize {
        self.into_iter().count()
    }
    /// Length of the longest downward path from this node.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Node naturally implements Iterator by recursing upward through its tree.
/// Each iteration yields a tuple of (Node, Move) representing the parent node
/// and the move taken to reach the current node.
impl<'tree, M> Iterator for Node<'tree, M>
where
    M: Move,
{
    type Item = (Self, M);
    fn next(&mut self) -> Option<Self::Item> {
        let (parent, m) = self.up()?;
        *self = parent;
        Some((parent, m))
    }
}

/// Renders like `[M:4 by 1, V/S/A: 12/7.5/14]`, or `[ROOT V: 40]`.
impl<'tree, M> std::fmt::Display for Node<'tree, M>
where
    M: Move,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        match (self.incoming(), self.player()) {
            (Some(m), Some(player)) => write!(
                f,
                "[M:{:?} by {}, V/S/A: {}/{:.1}/{}]",
                m,
                player,
                stats.visits(),
                stats.score(),
                stats.available()
            ),
            _ => write!(f, "[ROOT V: {}]", stats.visits()),
        }
    }
}

impl<'tree, M> std::fmt::Debug for Node<'tree, M>
where
    M: Move,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self,
            self.index.index(),
            self.graph.node_count()
        )
    }
}

/// Eq implementation will assume that any two
/// Nodes being compared to one another belong
/// to the same tree/graph. such that, we only
/// care about comparing indices.
impl<'tree, M> PartialEq for Node<'tree, M>
where
    M: Move,
{
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.graph, other.graph)
    }
}
impl<'tree, M> Eq for Node<'tree, M> where M: Move {}
