use super::*;

/// Hooks observed by a classified traversal.
///
/// Every method has a no-op default, so implementors only override what they need.
///
/// - Edge hooks fire synchronously during the walk, at the moment an edge is classified:
///   first [`TraversalVisitor::edge`], then the kind-specific hook.
/// - Node hooks fire after the walk, once per node of the corresponding sequence, in sequence
///   order: `pre` and `post` over the forward sequences, `rpre` and `rpost` over the reversed ones.
///   Each receives the node, its position in that sequence and the whole sequence.
///
/// Hooks must not start another traversal over the same state; they cannot, since the
/// traversal holds the only mutable reference to its visitor.
pub trait TraversalVisitor {
    fn pre(&mut self, _node: Node, _index: usize, _order: &[Node]) {}

    fn post(&mut self, _node: Node, _index: usize, _order: &[Node]) {}

    fn rpre(&mut self, _node: Node, _index: usize, _order: &[Node]) {}

    fn rpost(&mut self, _node: Node, _index: usize, _order: &[Node]) {}

    /// Called for every classified edge, regardless of its kind
    fn edge(&mut self, _edge: Edge, _kind: EdgeKind) {}

    fn tree_edge(&mut self, _edge: Edge) {}

    fn forward_edge(&mut self, _edge: Edge) {}

    fn back_edge(&mut self, _edge: Edge) {}

    fn cross_edge(&mut self, _edge: Edge) {}

    /// Returns *false* if none of the node hooks is implemented.
    /// The driver then skips the callback loops (and reversing sequences only needed for them).
    fn observes_nodes(&self) -> bool {
        true
    }

    /// Dispatches a classified edge to [`TraversalVisitor::edge`] and the kind-specific hook
    fn dispatch_edge(&mut self, edge: Edge, kind: EdgeKind) {
        self.edge(edge, kind);
        match kind {
            EdgeKind::Tree => self.tree_edge(edge),
            EdgeKind::Forward => self.forward_edge(edge),
            EdgeKind::Back => self.back_edge(edge),
            EdgeKind::Cross => self.cross_edge(edge),
        }
    }
}

/// The visitor that observes nothing
impl TraversalVisitor for () {
    fn observes_nodes(&self) -> bool {
        false
    }
}

impl<V> TraversalVisitor for &mut V
where
    V: TraversalVisitor + ?Sized,
{
    fn pre(&mut self, node: Node, index: usize, order: &[Node]) {
        (**self).pre(node, index, order)
    }

    fn post(&mut self, node: Node, index: usize, order: &[Node]) {
        (**self).post(node, index, order)
    }

    fn rpre(&mut self, node: Node, index: usize, order: &[Node]) {
        (**self).rpre(node, index, order)
    }

    fn rpost(&mut self, node: Node, index: usize, order: &[Node]) {
        (**self).rpost(node, index, order)
    }

    fn edge(&mut self, edge: Edge, kind: EdgeKind) {
        (**self).edge(edge, kind)
    }

    fn tree_edge(&mut self, edge: Edge) {
        (**self).tree_edge(edge)
    }

    fn forward_edge(&mut self, edge: Edge) {
        (**self).forward_edge(edge)
    }

    fn back_edge(&mut self, edge: Edge) {
        (**self).back_edge(edge)
    }

    fn cross_edge(&mut self, edge: Edge) {
        (**self).cross_edge(edge)
    }

    fn observes_nodes(&self) -> bool {
        (**self).observes_nodes()
    }
}

/// Records every hook invocation in order; used to check callback semantics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingVisitor {
    pub pre: Vec<(Node, usize)>,
    pub post: Vec<(Node, usize)>,
    pub rpre: Vec<(Node, usize)>,
    pub rpost: Vec<(Node, usize)>,
    pub edges: Vec<(Edge, EdgeKind)>,
    pub by_kind: EdgeBuckets,
}

impl TraversalVisitor for RecordingVisitor {
    fn pre(&mut self, node: Node, index: usize, _order: &[Node]) {
        self.pre.push((node, index));
    }

    fn post(&mut self, node: Node, index: usize, _order: &[Node]) {
        self.post.push((node, index));
    }

    fn rpre(&mut self, node: Node, index: usize, _order: &[Node]) {
        self.rpre.push((node, index));
    }

    fn rpost(&mut self, node: Node, index: usize, _order: &[Node]) {
        self.rpost.push((node, index));
    }

    fn edge(&mut self, edge: Edge, kind: EdgeKind) {
        self.edges.push((edge, kind));
    }

    fn tree_edge(&mut self, edge: Edge) {
        self.by_kind.push(edge, EdgeKind::Tree);
    }

    fn forward_edge(&mut self, edge: Edge) {
        self.by_kind.push(edge, EdgeKind::Forward);
    }

    fn back_edge(&mut self, edge: Edge) {
        self.by_kind.push(edge, EdgeKind::Back);
    }

    fn cross_edge(&mut self, edge: Edge) {
        self.by_kind.push(edge, EdgeKind::Cross);
    }
}
