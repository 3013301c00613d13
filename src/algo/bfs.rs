use std::collections::VecDeque;

use super::*;

/// Level-order walker with edge classification.
///
/// A node is appended to the pre-order and receives its level when it is first discovered, which
/// is also its edge-distance from the root of its tree. Parent pointers and levels persist across
/// sub-traversals so edges into earlier trees can be classified (they are always `Cross`).
pub struct BfsWalker<'a, G: ?Sized> {
    graph: &'a G,
    forest: BfsForest,
    queue: VecDeque<Node>,
}

impl<'a, G> BfsWalker<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            forest: BfsForest::new(graph.number_of_nodes()),
            queue: VecDeque::new(),
        }
    }

    /// Parent pointers and levels computed so far
    pub fn forest(&self) -> &BfsForest {
        &self.forest
    }
}

impl<G> Walker for BfsWalker<'_, G>
where
    G: AdjacencyList + ?Sized,
{
    const NAME: &'static str = "bfs";

    fn walk<S: EdgeSink>(&mut self, root: Node, state: &mut SearchState, sink: &mut S) {
        state.plant(root);
        state.discover(root);
        self.forest.plant(root);
        self.queue.push_back(root);

        let graph = self.graph;
        while let Some(u) = self.queue.pop_front() {
            for v in graph.neighbors_of(u) {
                if self.forest.has_parent(v) {
                    sink.add_edge(Edge(u, v), self.forest.classify(u, v));
                } else {
                    self.forest.attach(v, u);
                    sink.add_edge(Edge(u, v), EdgeKind::Tree);
                    state.discover(v);
                    self.queue.push_back(v);
                }
            }

            state.close(u);
        }
    }

    fn into_output(self, state: SearchState) -> WalkOutput {
        let (pre_order, _, roots) = state.into_orders();
        WalkOutput {
            pre_order,
            post_order: None,
            levels: Some(self.forest.into_levels()),
            roots,
        }
    }
}
