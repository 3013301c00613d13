/*!
# Graph Traversals

Depth-first and breadth-first traversals with edge classification, and minimal single-root walks.
Everything is re-exported at the top level of this module, so you can simply do:
```rust
use traversals::{prelude::*, algo::*};
```

### Classified traversals

A classified traversal is configured by a [`TraversalConfig`] and runs either as a method of the
[`Traversal`] trait, implemented for every [`AdjacencyList`], or from a host-supplied JSON
[`TraversalRequest`]. It yields a [`TraversalResult`] holding the requested orders and the edges
bucketed by [`EdgeKind`]. Callbacks are supplied as a [`TraversalVisitor`].

Internally the driver ([`traverse`]) owns one [`SearchState`] per call and runs a [`Walker`]
(recursive or flat depth-first, or breadth-first) on a single root or on every unvisited root.

### Simple walks

[`SimpleWalk`] visits the nodes reachable from one root in (reversed) pre- or post-order and can be
stopped early from its callback.
*/

mod bfs;
mod classify;
mod config;
mod dfs;
mod driver;
mod request;
mod state;
mod visitor;
mod walk;
mod walker;

use crate::{Result, prelude::*};

pub use bfs::*;
pub use classify::*;
pub use config::*;
pub use dfs::*;
pub use driver::*;
pub use request::*;
pub use state::*;
pub use visitor::*;
pub use walk::*;
pub use walker::*;
