use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::Node;

/// A directed edge `from -> to`, defined by its two endpoints.
///
/// Serializes as a two-element array `[from, to]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Classification of an edge relative to the traversal tree that discovered it.
///
/// - `Tree`: the edge via which its target was first discovered.
/// - `Forward`: (depth-first only) edge to an already finished descendant.
/// - `Back`: edge to an ancestor (still open in depth-first search, higher in the BFS tree otherwise).
/// - `Cross`: edge to a node without ancestor/descendant relation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Tree,
    Forward,
    Back,
    Cross,
}

impl EdgeKind {
    /// All kinds in their canonical order
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::Tree,
        EdgeKind::Forward,
        EdgeKind::Back,
        EdgeKind::Cross,
    ];

    /// Lowercase name of the kind (`"tree"`, `"forward"`, `"back"`, `"cross"`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Tree => "tree",
            EdgeKind::Forward => "forward",
            EdgeKind::Back => "back",
            EdgeKind::Cross => "cross",
        }
    }
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified edges grouped by their [`EdgeKind`].
///
/// Within each bucket, edges keep the order in which they were classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBuckets {
    pub tree: Vec<Edge>,
    pub forward: Vec<Edge>,
    pub back: Vec<Edge>,
    pub cross: Vec<Edge>,
}

impl EdgeBuckets {
    /// Appends `edge` to the bucket of `kind`
    pub fn push(&mut self, edge: Edge, kind: EdgeKind) {
        self.bucket_mut(kind).push(edge);
    }

    /// Returns the edges of the given kind in classification order
    pub fn get(&self, kind: EdgeKind) -> &[Edge] {
        match kind {
            EdgeKind::Tree => &self.tree,
            EdgeKind::Forward => &self.forward,
            EdgeKind::Back => &self.back,
            EdgeKind::Cross => &self.cross,
        }
    }

    fn bucket_mut(&mut self, kind: EdgeKind) -> &mut Vec<Edge> {
        match kind {
            EdgeKind::Tree => &mut self.tree,
            EdgeKind::Forward => &mut self.forward,
            EdgeKind::Back => &mut self.back,
            EdgeKind::Cross => &mut self.cross,
        }
    }

    /// Total number of classified edges
    pub fn len(&self) -> usize {
        EdgeKind::ALL.iter().map(|&k| self.get(k).len()).sum()
    }

    /// Returns *true* if no edge was classified
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all `(edge, kind)`-pairs bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = (Edge, EdgeKind)> + '_ {
        EdgeKind::ALL
            .into_iter()
            .flat_map(move |k| self.get(k).iter().map(move |&e| (e, k)))
    }
}
