/*!
The generic traversal driver.

[`traverse`] owns the shared [`SearchState`], invokes a [`Walker`] once (spanning-tree mode) or
on every still-unvisited node scanning from the start index with wrap-around (spanning-forest
mode), and assembles a [`TraversalResult`] shaped by the [`TraversalConfig`].
*/

use bitvec::prelude::*;
use itertools::Itertools;
use serde::Serialize;

use super::*;

/// Output of a classified traversal.
///
/// Only fields selected by the configuration are present. Serializes to an object with camelCase
/// keys, omitting absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_order: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_order: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_pre_order: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_post_order: Option<Vec<Node>>,
    /// Breadth-first only: `levels[u]` is the level of `u`, or `INVALID_NODE` if unreached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Level>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeBuckets>,
    /// Root of every sub-traversal in the order they were started
    #[serde(skip)]
    pub roots: Vec<Node>,
}

/// Adapter between walkers and the caller: buckets edges if requested and forwards them to the
/// visitor as they are classified.
struct EdgeCollector<'v, V> {
    visitor: &'v mut V,
    buckets: Option<EdgeBuckets>,
}

impl<V: TraversalVisitor> EdgeSink for EdgeCollector<'_, V> {
    fn add_edge(&mut self, edge: Edge, kind: EdgeKind) {
        log::trace!("{kind} edge {edge}");
        if let Some(buckets) = self.buckets.as_mut() {
            buckets.push(edge, kind);
        }
        self.visitor.dispatch_edge(edge, kind);
    }
}

/// Runs `walker` over `graph` as configured and assembles the result.
///
/// Edge hooks of `visitor` fire during the walk; node hooks fire afterwards, see
/// [`TraversalVisitor`].
pub fn traverse<G, W, V>(
    graph: &G,
    mut walker: W,
    config: &TraversalConfig,
    visitor: &mut V,
) -> TraversalResult
where
    G: AdjacencyList + ?Sized,
    W: Walker,
    V: TraversalVisitor,
{
    let n = graph.number_of_nodes();
    let mut state = SearchState::new(n);
    let mut collector = EdgeCollector {
        visitor,
        buckets: config.edges.then(EdgeBuckets::default),
    };

    if let Some(start) = wrap_index(config.start_index, n) {
        log::debug!(
            "{} over {n} nodes from {start} ({})",
            W::NAME,
            if config.spanning_tree {
                "spanning tree"
            } else {
                "spanning forest"
            }
        );

        if config.spanning_tree {
            walker.walk(start, &mut state, &mut collector);
        } else {
            for root in (start..n).chain(0..start) {
                if !state.is_visited(root) {
                    log::debug!("{} sub-traversal from root {root}", W::NAME);
                    walker.walk(root, &mut state, &mut collector);
                }
            }
        }
    }

    let EdgeCollector { visitor, buckets } = collector;
    let output = walker.into_output(state);
    assemble(n, output, buckets, config, visitor)
}

fn assemble<V: TraversalVisitor>(
    n: NumNodes,
    output: WalkOutput,
    edges: Option<EdgeBuckets>,
    config: &TraversalConfig,
    visitor: &mut V,
) -> TraversalResult {
    let WalkOutput {
        pre_order,
        post_order,
        levels,
        roots,
    } = output;

    let reversed = |seq: &[Node]| seq.iter().rev().copied().collect_vec();
    let need_r_post = config.needs_r_post_order(visitor);
    let r_pre_order = config
        .needs_r_pre_order(visitor)
        .then(|| reversed(&pre_order));
    let r_post_order = post_order
        .as_deref()
        .filter(|_| need_r_post)
        .map(reversed);

    if visitor.observes_nodes() {
        let mut excluded = bitvec![0; n as usize];
        if config.exclude_root && !config.spanning_tree {
            for &root in &roots {
                excluded.set(root as usize, true);
            }
        }

        fire_hooks(&pre_order, &excluded, |u, i, s| visitor.pre(u, i, s));
        if let Some(post_order) = &post_order {
            fire_hooks(post_order, &excluded, |u, i, s| visitor.post(u, i, s));
        }
        if let Some(r_pre_order) = &r_pre_order {
            fire_hooks(r_pre_order, &excluded, |u, i, s| visitor.rpre(u, i, s));
        }
        if let Some(r_post_order) = &r_post_order {
            fire_hooks(r_post_order, &excluded, |u, i, s| visitor.rpost(u, i, s));
        }
    }

    TraversalResult {
        pre_order: config.pre_order.then_some(pre_order),
        post_order: post_order.filter(|_| config.post_order),
        r_pre_order: r_pre_order.filter(|_| config.r_pre_order),
        r_post_order: r_post_order.filter(|_| config.r_post_order),
        levels: levels.filter(|_| config.post_order),
        edges,
        roots,
    }
}

fn fire_hooks<F>(seq: &[Node], excluded: &BitSlice, mut hook: F)
where
    F: FnMut(Node, usize, &[Node]),
{
    for (index, &u) in seq.iter().enumerate() {
        if !excluded[u as usize] {
            hook(u, index, seq);
        }
    }
}

/// Classified traversals as methods on every adjacency list.
///
/// # Examples
/// ```
/// use traversals::{prelude::*, algo::*};
///
/// let graph: Vec<Vec<Node>> = vec![vec![1, 2], vec![2], vec![0]];
/// let result = graph.depth_first(&TraversalConfig::default());
///
/// assert_eq!(result.pre_order.unwrap(), vec![0, 1, 2]);
/// assert_eq!(result.post_order.unwrap(), vec![2, 1, 0]);
///
/// let edges = result.edges.unwrap();
/// assert_eq!(edges.tree, vec![Edge(0, 1), Edge(1, 2)]);
/// assert_eq!(edges.back, vec![Edge(2, 0)]);
/// assert_eq!(edges.forward, vec![Edge(0, 2)]);
/// ```
pub trait Traversal: AdjacencyList {
    /// Depth-first traversal without hooks
    fn depth_first(&self, config: &TraversalConfig) -> TraversalResult {
        self.depth_first_with(config, &mut ())
    }

    /// Depth-first traversal reporting to `visitor`.
    /// Uses the iterative walker if `config.flat` is set.
    fn depth_first_with<V: TraversalVisitor>(
        &self,
        config: &TraversalConfig,
        visitor: &mut V,
    ) -> TraversalResult {
        if config.flat {
            traverse(self, FlatDfsWalker::new(self), config, visitor)
        } else {
            traverse(self, DfsWalker::new(self), config, visitor)
        }
    }

    /// Breadth-first traversal without hooks
    fn breadth_first(&self, config: &TraversalConfig) -> TraversalResult {
        self.breadth_first_with(config, &mut ())
    }

    /// Breadth-first traversal reporting to `visitor`
    fn breadth_first_with<V: TraversalVisitor>(
        &self,
        config: &TraversalConfig,
        visitor: &mut V,
    ) -> TraversalResult {
        traverse(self, BfsWalker::new(self), config, visitor)
    }

    /// Simple single-root walks starting at node `0`, see [`SimpleWalk`]
    fn simple_walk(&self) -> SimpleWalk<'_, Self> {
        SimpleWalk::new(self)
    }
}

impl<G> Traversal for G where G: AdjacencyList + ?Sized {}
