/*!
# Graph Access

Read-only access traits used by every walker. The order of a node's neighbors is semantically
significant: it determines traversal order and thereby the classification of edges.
*/

use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of all node identities.
    ///
    /// In contrast to borrowing iterators, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered out-neighborhoods of a directed graph
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns the out-neighbors of `u` in adjacency order.
    /// ** Panics if `u >= n` **
    fn neighbors_of_slice(&self, u: Node) -> &[Node];

    /// Returns an iterator over the out-neighbors of `u` in adjacency order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of_slice(u).iter().copied()
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of_slice(u).len() as NumNodes
    }

    /// Returns the number of adjacency entries, counting duplicates and self-loops
    fn number_of_edges(&self) -> usize {
        self.vertices_range()
            .map(|u| self.neighbors_of_slice(u).len())
            .sum()
    }

    /// Returns an iterator over all edges in adjacency order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.neighbors_of(u).map(move |v| Edge(u, v)))
    }
}

impl GraphNodeOrder for [Vec<Node>] {
    fn number_of_nodes(&self) -> NumNodes {
        <[Vec<Node>]>::len(self) as NumNodes
    }
}

impl AdjacencyList for [Vec<Node>] {
    fn neighbors_of_slice(&self, u: Node) -> &[Node] {
        &self[u as usize]
    }
}

impl GraphNodeOrder for Vec<Vec<Node>> {
    fn number_of_nodes(&self) -> NumNodes {
        self.as_slice().number_of_nodes()
    }
}

impl AdjacencyList for Vec<Vec<Node>> {
    fn neighbors_of_slice(&self, u: Node) -> &[Node] {
        &self[u as usize]
    }
}
