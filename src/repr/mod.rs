/*!
# Graph Representation

[`AdjArray`] is the normalized, immutable adjacency list every traversal works on: node `u`'s
out-neighbors are stored in the order they were given.

Graphs coming from untrusted sources (for example JSON produced by a host application) may be
"dirty": an entry may be a bare number instead of a list, or missing entirely. The [`raw`] module
coerces such entries into proper neighborhoods, see [`RawAdjacency`].
*/

use crate::{ops::*, *};

pub mod raw;

pub use raw::{RawAdjacency, RawNode};

/// Directed graph stored as one ordered neighbor-array per node.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    out_nbs: Vec<Vec<Node>>,
}

impl AdjArray {
    /// Creates a graph with `n` nodes and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Vec::new(); n as usize],
        }
    }

    /// Creates a graph from a number of nodes and an iterator over edges.
    /// Edges are appended to their source's neighborhood in iteration order.
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(Into::<Edge>::into) {
            assert!(v < n, "edge target {v} out of range");
            graph.out_nbs[u as usize].push(v);
        }
        graph
    }

    /// Wraps already well-formed neighborhoods without checking them.
    ///
    /// Walking a graph that references nodes `>= n` panics; use
    /// [`AdjArray::try_from_neighborhoods`] for input of unknown quality.
    pub fn from_neighborhoods(out_nbs: Vec<Vec<Node>>) -> Self {
        Self { out_nbs }
    }

    /// Wraps neighborhoods after checking that every target is a node of the graph.
    pub fn try_from_neighborhoods(out_nbs: Vec<Vec<Node>>) -> Result<Self> {
        let len = out_nbs.len() as NumNodes;
        if let Some(&node) = out_nbs.iter().flatten().find(|&&v| v >= len) {
            return Err(TraversalError::NodeOutOfRange { node, len });
        }
        Ok(Self { out_nbs })
    }

    /// Coerces untrusted entries into a graph, see [`RawAdjacency`].
    ///
    /// Fails if an entry contains something that is not a node identity or references a node
    /// outside the graph.
    pub fn from_raw(entries: impl IntoIterator<Item = RawAdjacency>) -> Result<Self> {
        let out_nbs = entries
            .into_iter()
            .enumerate()
            .map(|(u, entry)| entry.into_neighborhood(u as Node))
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_neighborhoods(out_nbs)
    }

    /// Returns the neighborhoods as a slice of neighbor lists
    pub fn as_lists(&self) -> &[Vec<Node>] {
        &self.out_nbs
    }

    /// Consumes the graph and returns its neighborhoods
    pub fn into_lists(self) -> Vec<Vec<Node>> {
        self.out_nbs
    }
}

impl std::fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.out_nbs.iter().enumerate()).finish()
    }
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of_slice(&self, u: Node) -> &[Node] {
        &self.out_nbs[u as usize]
    }
}

impl From<Vec<Vec<Node>>> for AdjArray {
    fn from(out_nbs: Vec<Vec<Node>>) -> Self {
        Self::from_neighborhoods(out_nbs)
    }
}
