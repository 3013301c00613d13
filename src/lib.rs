/*!
`traversals` classifies the edges of directed graphs while walking them depth-first or
breadth-first.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph;
a node's identity is its position in the adjacency list.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` pointing from `.0` to `.1`.

A graph is an ordered list of out-neighborhoods. The order of neighbors matters: it decides the
order in which nodes are discovered and thereby how every edge is classified. Traversals work on
anything implementing [`AdjacencyList`](ops::AdjacencyList), in particular on the normalized
[`AdjArray`](repr::AdjArray) and on a raw `Vec<Vec<Node>>`.

# Edge Classification

Every adjacency entry `u -> v` is classified exactly once, at the moment it is examined:
- **tree**: `v` is discovered via this edge,
- **back**: `v` is an ancestor of `u` (still open in depth-first search),
- **forward**: `v` is an already finished descendant of `u` (depth-first only),
- **cross**: anything else.

# Design

Traversals are configured by the struct [`TraversalConfig`](algo::TraversalConfig) using either the
*Builder* / *Setter* pattern or JSON options, and are available as trait methods on the graph itself:

```
use traversals::{prelude::*, algo::*};

let graph: Vec<Vec<Node>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
let result = graph.breadth_first(&TraversalConfig::default());

assert_eq!(result.pre_order.unwrap(), vec![0, 1, 2, 3]);
assert_eq!(result.levels.unwrap(), vec![0, 1, 1, 2]);
assert_eq!(result.edges.unwrap().cross, vec![Edge(2, 3)]);
```

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, the graph access traits and [`AdjArray`](repr::AdjArray),
- [`algo`] includes the traversals, their configuration, visitors and the simple walks,
- [`repr`] includes the graph representation and the coercion of untrusted JSON input.

In most use-cases, `use traversals::{prelude::*, algo::*};` suffices for your needs.

The crate logs through the [`log`] facade (`debug` per traversal and root, `trace` per edge) and
never installs a logger itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::{Edge, EdgeBuckets, EdgeKind};
pub use error::{Result, TraversalError};
pub use node::*;

/// `traversals::prelude` includes definitions for nodes and edges, the error type, all graph
/// access traits and the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::TraversalError, node::*, ops::*, repr::*};
}
