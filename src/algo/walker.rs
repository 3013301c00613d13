use super::*;

/// Receiver of classified edges.
///
/// Walkers report every adjacency entry they process exactly once, synchronously, at the moment
/// it is classified.
pub trait EdgeSink {
    fn add_edge(&mut self, edge: Edge, kind: EdgeKind);
}

impl<F> EdgeSink for F
where
    F: FnMut(Edge, EdgeKind),
{
    fn add_edge(&mut self, edge: Edge, kind: EdgeKind) {
        self(edge, kind)
    }
}

/// Sequences produced by a walker once all sub-traversals are done
#[derive(Debug, Clone, Default)]
pub struct WalkOutput {
    pub pre_order: Vec<Node>,
    /// Only produced by depth-first walkers
    pub post_order: Option<Vec<Node>>,
    /// Only produced by breadth-first walkers; `levels[u]` is `INVALID_NODE` for unreached `u`
    pub levels: Option<Vec<Level>>,
    pub roots: Vec<Node>,
}

/// A single-root traversal engine.
///
/// The driver calls [`Walker::walk`] once per sub-traversal root, always with an unvisited root,
/// and shares one [`SearchState`] between all calls.
pub trait Walker {
    /// Name used in log messages
    const NAME: &'static str;

    /// Walks everything reachable from `root` that is not yet visited.
    fn walk<S: EdgeSink>(&mut self, root: Node, state: &mut SearchState, sink: &mut S);

    /// Consumes the walker and turns the final state into its output
    fn into_output(self, state: SearchState) -> WalkOutput;
}
