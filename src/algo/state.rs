use super::*;

/// Visitation marker of a single node.
///
/// In depth-first search a node is `Discovered` while it is on the (implicit or explicit)
/// recursion stack; in breadth-first search while it sits in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unvisited,
    Discovered,
    Finished,
}

/// Mutable state shared by all walkers of one top-level traversal.
///
/// Holds the visitation markers, the discovery number of every node and the pre-/post-order
/// sequences. A fresh `SearchState` is allocated per traversal and is shared by all
/// sub-traversals of a spanning forest, so every node enters the pre-order at most once.
#[derive(Debug, Clone)]
pub struct SearchState {
    states: Vec<NodeState>,
    pre_number: Vec<Node>,
    pre_order: Vec<Node>,
    post_order: Vec<Node>,
    roots: Vec<Node>,
}

impl SearchState {
    /// Creates the state for a graph with `n` nodes, all unvisited
    pub fn new(n: NumNodes) -> Self {
        Self {
            states: vec![NodeState::Unvisited; n as usize],
            pre_number: vec![INVALID_NODE; n as usize],
            pre_order: Vec::with_capacity(n as usize),
            post_order: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Returns the visitation marker of `u`
    pub fn state_of(&self, u: Node) -> NodeState {
        self.states[u as usize]
    }

    /// Returns *true* if `u` was discovered at some point
    pub fn is_visited(&self, u: Node) -> bool {
        self.state_of(u) != NodeState::Unvisited
    }

    /// Position of `u` in the pre-order, or `INVALID_NODE` if `u` is unvisited
    pub fn pre_number_of(&self, u: Node) -> Node {
        self.pre_number[u as usize]
    }

    /// Registers `root` as the root of a new sub-traversal
    pub(crate) fn plant(&mut self, root: Node) {
        self.roots.push(root);
    }

    /// Marks `u` as discovered and appends it to the pre-order.
    pub(crate) fn discover(&mut self, u: Node) {
        debug_assert_eq!(self.state_of(u), NodeState::Unvisited);
        self.states[u as usize] = NodeState::Discovered;
        self.pre_number[u as usize] = self.pre_order.len() as Node;
        self.pre_order.push(u);
    }

    /// Marks `u` as finished without recording it in the post-order
    pub(crate) fn close(&mut self, u: Node) {
        self.states[u as usize] = NodeState::Finished;
    }

    /// Marks `u` as finished and appends it to the post-order
    pub(crate) fn finish(&mut self, u: Node) {
        self.close(u);
        self.post_order.push(u);
    }

    /// Nodes in order of discovery
    pub fn pre_order(&self) -> &[Node] {
        &self.pre_order
    }

    /// Nodes in order of completion
    pub fn post_order(&self) -> &[Node] {
        &self.post_order
    }

    /// Roots of all sub-traversals so far
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub(crate) fn into_orders(self) -> (Vec<Node>, Vec<Node>, Vec<Node>) {
        (self.pre_order, self.post_order, self.roots)
    }
}
