/*!
Depth-first walkers with edge classification.

[`DfsWalker`] recurses on the native call stack. [`FlatDfsWalker`] simulates the recursion with an
explicit stack of [`Step`]s and can therefore walk graphs whose depth exceeds the call-stack budget.
Both produce identical pre-orders, post-orders and classifications for the same input and root.
*/

use super::*;

/// Recursive depth-first walker
pub struct DfsWalker<'a, G: ?Sized> {
    graph: &'a G,
}

impl<'a, G> DfsWalker<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    fn visit<S: EdgeSink>(&self, u: Node, state: &mut SearchState, sink: &mut S) {
        for v in self.graph.neighbors_of(u) {
            if state.is_visited(v) {
                sink.add_edge(Edge(u, v), classify_dfs_edge(state, u, v));
            } else {
                sink.add_edge(Edge(u, v), EdgeKind::Tree);
                state.discover(v);
                self.visit(v, state, sink);
            }
        }

        state.finish(u);
    }
}

impl<G> Walker for DfsWalker<'_, G>
where
    G: AdjacencyList + ?Sized,
{
    const NAME: &'static str = "dfs";

    fn walk<S: EdgeSink>(&mut self, root: Node, state: &mut SearchState, sink: &mut S) {
        state.plant(root);
        state.discover(root);
        self.visit(root, state, sink);
    }

    fn into_output(self, state: SearchState) -> WalkOutput {
        let (pre_order, post_order, roots) = state.into_orders();
        WalkOutput {
            pre_order,
            post_order: Some(post_order),
            levels: None,
            roots,
        }
    }
}

/// Work item of [`FlatDfsWalker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Examine `node`, reached via the edge `parent -> node` (no parent for the root)
    Enter { node: Node, parent: Option<Node> },
    /// All neighbors of the node were examined
    Exit(Node),
}

/// Iterative depth-first walker.
///
/// Entering a node pushes its `Exit` marker followed by one `Enter` per neighbor in reverse
/// adjacency order. An `Enter` step classifies its edge only when it is popped, which is exactly
/// when the recursive walker would look at that neighbor; a node pushed by several parents
/// therefore produces a tree edge only for the first of them.
pub struct FlatDfsWalker<'a, G: ?Sized> {
    graph: &'a G,
    stack: Vec<Step>,
}

impl<'a, G> FlatDfsWalker<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::new(),
        }
    }
}

impl<G> Walker for FlatDfsWalker<'_, G>
where
    G: AdjacencyList + ?Sized,
{
    const NAME: &'static str = "flat dfs";

    fn walk<S: EdgeSink>(&mut self, root: Node, state: &mut SearchState, sink: &mut S) {
        state.plant(root);
        self.stack.push(Step::Enter {
            node: root,
            parent: None,
        });

        while let Some(step) = self.stack.pop() {
            match step {
                Step::Exit(u) => state.finish(u),
                Step::Enter { node: v, parent } => {
                    if let Some(u) = parent {
                        if state.is_visited(v) {
                            sink.add_edge(Edge(u, v), classify_dfs_edge(state, u, v));
                            continue;
                        }
                        sink.add_edge(Edge(u, v), EdgeKind::Tree);
                    }

                    state.discover(v);
                    self.stack.push(Step::Exit(v));

                    let graph = self.graph;
                    self.stack.extend(graph.neighbors_of_slice(v).iter().rev().map(|&w| {
                        Step::Enter {
                            node: w,
                            parent: Some(v),
                        }
                    }));
                }
            }
        }
    }

    fn into_output(self, state: SearchState) -> WalkOutput {
        let (pre_order, post_order, roots) = state.into_orders();
        WalkOutput {
            pre_order,
            post_order: Some(post_order),
            levels: None,
            roots,
        }
    }
}
