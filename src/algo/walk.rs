/*!
Minimal single-root walkers without edge classification.

Each walker calls a callback once per reached node with the node and its position in the walk.
The callback decides whether to go on:
- `ControlFlow::Continue(())` keeps walking,
- `ControlFlow::Break(Some(value))` stops immediately and makes the walk return `Break(value)`,
- `ControlFlow::Break(None)` stops immediately and returns the current node (converted into `B`).

No callback is invoked after a break. A walk that runs to completion returns `Continue(())`.
*/

use std::ops::ControlFlow;

use bitvec::prelude::*;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitTime {
    Pre,
    Post,
}

/// Single-root depth-first walks over an adjacency list, taken as-is.
///
/// The graph is not normalized and the walk is recursive, so its depth is bounded by the call
/// stack. Use the classified traversals in [`Traversal`] for large or untrusted graphs.
///
/// ** Panics if an adjacency list names a node `>= n` **
///
/// # Examples
/// ```
/// use std::ops::ControlFlow;
/// use traversals::{prelude::*, algo::*};
///
/// let graph: Vec<Vec<Node>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
///
/// let mut seen = Vec::new();
/// let res = graph.simple_walk().pre_order::<Node, _>(|u, _| {
///     seen.push(u);
///     if u == 3 { ControlFlow::Break(None) } else { ControlFlow::Continue(()) }
/// });
///
/// assert_eq!(res.unwrap(), ControlFlow::Break(3));
/// assert_eq!(seen, vec![0, 1, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimpleWalk<'a, G: ?Sized> {
    graph: &'a G,
    root: Node,
}

impl<'a, G> SimpleWalk<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    /// Creates walks over `graph` starting at node `0`
    pub fn new(graph: &'a G) -> Self {
        Self { graph, root: 0 }
    }

    /// Sets the node to start at
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the node to start at and returns the walk
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Calls `callback` on every reachable node in depth-first pre-order
    ///
    /// # Errors
    /// Fails with [`TraversalError::NodeOutOfRange`] if the root is not a node of the graph.
    pub fn pre_order<B, F>(&self, mut callback: F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        self.forward(VisitTime::Pre, &mut callback)
    }

    /// Calls `callback` on every reachable node in depth-first post-order
    ///
    /// # Errors
    /// Fails with [`TraversalError::NodeOutOfRange`] if the root is not a node of the graph.
    pub fn post_order<B, F>(&self, mut callback: F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        self.forward(VisitTime::Post, &mut callback)
    }

    /// Calls `callback` on every reachable node in reversed depth-first pre-order.
    /// Positions count from `0` in the reversed walk.
    ///
    /// # Errors
    /// Fails with [`TraversalError::NodeOutOfRange`] if the root is not a node of the graph.
    pub fn rev_pre_order<B, F>(&self, mut callback: F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        self.backward(VisitTime::Pre, &mut callback)
    }

    /// Calls `callback` on every reachable node in reversed depth-first post-order.
    /// Positions count from `0` in the reversed walk.
    ///
    /// # Errors
    /// Fails with [`TraversalError::NodeOutOfRange`] if the root is not a node of the graph.
    pub fn rev_post_order<B, F>(&self, mut callback: F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        self.backward(VisitTime::Post, &mut callback)
    }

    fn check_root(&self) -> Result<()> {
        let len = self.graph.number_of_nodes();
        if self.root < len {
            Ok(())
        } else {
            Err(TraversalError::NodeOutOfRange {
                node: self.root,
                len,
            })
        }
    }

    fn forward<B, F>(&self, at: VisitTime, callback: &mut F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        self.check_root()?;

        let mut visited = bitvec![0; self.graph.len()];
        let mut index = 0;
        Ok(self.visit(self.root, at, &mut visited, &mut index, callback))
    }

    /// Runs the forward walk to completion while only buffering nodes, then replays the buffer
    /// from its end.
    fn backward<B, F>(&self, at: VisitTime, callback: &mut F) -> Result<ControlFlow<B>>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        let mut buffer = Vec::with_capacity(self.graph.len());
        let _: ControlFlow<Node> = self.forward(at, &mut |u, _| {
            buffer.push(u);
            ControlFlow::Continue(())
        })?;

        for (index, &u) in buffer.iter().rev().enumerate() {
            if let ControlFlow::Break(value) = emit(u, index, callback) {
                return Ok(ControlFlow::Break(value));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn visit<B, F>(
        &self,
        u: Node,
        at: VisitTime,
        visited: &mut BitVec,
        index: &mut usize,
        callback: &mut F,
    ) -> ControlFlow<B>
    where
        B: From<Node>,
        F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
    {
        visited.set(u as usize, true);

        if at == VisitTime::Pre {
            emit(u, next(index), callback)?;
        }

        for v in self.graph.neighbors_of(u) {
            if !visited[v as usize] {
                self.visit(v, at, visited, index, callback)?;
            }
        }

        if at == VisitTime::Post {
            emit(u, next(index), callback)?;
        }

        ControlFlow::Continue(())
    }
}

fn next(index: &mut usize) -> usize {
    let current = *index;
    *index += 1;
    current
}

fn emit<B, F>(u: Node, index: usize, callback: &mut F) -> ControlFlow<B>
where
    B: From<Node>,
    F: FnMut(Node, usize) -> ControlFlow<Option<B>>,
{
    match callback(u, index) {
        ControlFlow::Continue(()) => ControlFlow::Continue(()),
        ControlFlow::Break(value) => {
            log::trace!("walk aborted at node {u} (position {index})");
            ControlFlow::Break(value.unwrap_or_else(|| B::from(u)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    /// Records every call and never aborts
    fn record<B>(
        calls: &mut Vec<(Node, usize)>,
    ) -> impl FnMut(Node, usize) -> ControlFlow<Option<B>> + '_ {
        move |u, i| {
            calls.push((u, i));
            ControlFlow::Continue(())
        }
    }

    fn nodes(calls: &[(Node, usize)]) -> Vec<Node> {
        calls.iter().map(|&(u, _)| u).collect()
    }

    #[test]
    fn full_walks() {
        let graph = cyclic_graph();
        let walk = graph.simple_walk();

        let mut calls = Vec::new();
        let res = walk.pre_order::<Node, _>(record(&mut calls)).unwrap();
        assert_eq!(res, ControlFlow::Continue(()));
        assert_eq!(nodes(&calls), CYCLIC_PRE_ORDER);
        assert!(calls.iter().enumerate().all(|(i, &(_, j))| i == j));

        let mut calls = Vec::new();
        walk.post_order::<Node, _>(record(&mut calls)).unwrap();
        assert_eq!(nodes(&calls), CYCLIC_POST_ORDER);

        let mut calls = Vec::new();
        walk.rev_pre_order::<Node, _>(record(&mut calls)).unwrap();
        assert_eq!(nodes(&calls), vec![5, 8, 7, 6, 4, 3, 2, 1, 0]);
        assert_eq!(calls[0], (5, 0));

        let mut calls = Vec::new();
        walk.rev_post_order::<Node, _>(record(&mut calls)).unwrap();
        assert_eq!(nodes(&calls), vec![0, 1, 2, 3, 5, 4, 6, 7, 8]);
        assert_eq!(calls[8], (8, 8));
    }

    #[test]
    fn abort_returns_current_node() {
        let graph = cyclic_graph();
        let mut seen = Vec::new();

        let res = graph.simple_walk().pre_order::<Node, _>(|u, _| {
            seen.push(u);
            if u == 3 {
                ControlFlow::Break(None)
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(res.unwrap(), ControlFlow::<Node>::Break(3));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn abort_with_value() {
        let graph = cyclic_graph();
        let mut calls = 0;

        let res = graph.simple_walk().post_order(|_, i| {
            calls += 1;
            if i == 2 {
                ControlFlow::Break(Some(42u64))
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(res.unwrap(), ControlFlow::Break(42));
        assert_eq!(calls, 3);
    }

    #[test]
    fn abort_during_replay() {
        let graph = cyclic_graph();
        let mut calls = Vec::new();

        let res = graph.simple_walk().rev_pre_order::<Node, _>(|u, i| {
            calls.push((u, i));
            if u == 7 {
                ControlFlow::Break(None)
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(res.unwrap(), ControlFlow::<Node>::Break(7));
        assert_eq!(calls, vec![(5, 0), (8, 1), (7, 2)]);
    }

    #[test]
    fn custom_root() {
        let graph = cyclic_graph();
        let mut calls = Vec::new();

        graph
            .simple_walk()
            .root(5)
            .pre_order::<Node, _>(record(&mut calls))
            .unwrap();
        assert_eq!(nodes(&calls), vec![5, 6, 7, 8, 2, 3, 4]);

        let mut walk = SimpleWalk::new(&graph);
        walk.set_root(8);
        let mut calls = Vec::new();
        walk.rev_post_order::<Node, _>(record(&mut calls)).unwrap();
        assert_eq!(calls, vec![(8, 0)]);
    }

    #[test]
    fn root_out_of_range() {
        let graph = cyclic_graph();
        let res = graph
            .simple_walk()
            .root(9)
            .pre_order::<Node, _>(|_, _| ControlFlow::Continue(()));
        assert!(matches!(
            res,
            Err(TraversalError::NodeOutOfRange { node: 9, len: 9 })
        ));

        let empty: Vec<Vec<Node>> = Vec::new();
        assert!(
            empty
                .simple_walk()
                .rev_post_order::<Node, _>(|_, _| ControlFlow::Continue(()))
                .is_err()
        );
    }

    #[test]
    fn agrees_with_classified_traversal() {
        for (_, graph) in random_graphs(5, 40) {
            let result = graph.depth_first(&TraversalConfig::default());

            let mut calls = Vec::new();
            graph.simple_walk().pre_order::<Node, _>(record(&mut calls)).unwrap();
            assert_eq!(Some(nodes(&calls)), result.pre_order);

            let mut calls = Vec::new();
            graph.simple_walk().post_order::<Node, _>(record(&mut calls)).unwrap();
            assert_eq!(Some(nodes(&calls)), result.post_order);
        }
    }
}
