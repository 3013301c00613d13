/*!
Edge classification for edges whose target was already discovered.

Tree edges are decided by the walkers themselves (the target is unvisited); this module decides
between the remaining kinds:

- **Depth-first**: the target is still `Discovered` (an ancestor on the current path) → `Back`;
  otherwise it is finished, and it is a descendant (`Forward`) iff it was discovered after the
  source. Everything else is `Cross`. Discovery numbers plus open/finished status determine the
  taxonomy in one pass without completion times.
- **Breadth-first**: the deeper endpoint climbs its tree-parents up to the level of the shallower
  one. If it lands on the shallower endpoint, one is an ancestor of the other → `Back`; otherwise
  `Cross`. Breadth-first search never produces `Forward` edges.
*/

use super::*;

/// Classifies the depth-first edge `u -> v` where `v` is already visited.
pub fn classify_dfs_edge(state: &SearchState, u: Node, v: Node) -> EdgeKind {
    debug_assert!(state.is_visited(v));

    if state.state_of(v) == NodeState::Discovered {
        EdgeKind::Back
    } else if state.pre_number_of(u) < state.pre_number_of(v) {
        EdgeKind::Forward
    } else {
        EdgeKind::Cross
    }
}

/// Parent pointers and levels of a breadth-first spanning forest.
///
/// Roots are their own parent and have level `0`, so climbing never leaves a tree. An edge between
/// two trees of the forest is therefore always classified as `Cross`.
#[derive(Debug, Clone)]
pub struct BfsForest {
    parents: Vec<Node>,
    levels: Vec<Level>,
}

impl BfsForest {
    /// Creates a forest over `n` nodes, none of which is attached yet
    pub fn new(n: NumNodes) -> Self {
        Self {
            parents: vec![INVALID_NODE; n as usize],
            levels: vec![INVALID_NODE; n as usize],
        }
    }

    /// Returns *true* if `u` already belongs to a tree of the forest
    pub fn has_parent(&self, u: Node) -> bool {
        self.parents[u as usize] != INVALID_NODE
    }

    /// Tree-parent of `u`; roots are their own parent, unattached nodes yield `INVALID_NODE`
    pub fn parent_of(&self, u: Node) -> Node {
        self.parents[u as usize]
    }

    /// Level of `u`, or `INVALID_NODE` if `u` is unattached
    pub fn level_of(&self, u: Node) -> Level {
        self.levels[u as usize]
    }

    /// Makes `root` the root of a new tree
    pub fn plant(&mut self, root: Node) {
        self.parents[root as usize] = root;
        self.levels[root as usize] = 0;
    }

    /// Attaches `v` as child of `u`
    pub fn attach(&mut self, v: Node, u: Node) {
        debug_assert!(self.has_parent(u) && !self.has_parent(v));
        self.parents[v as usize] = u;
        self.levels[v as usize] = self.levels[u as usize] + 1;
    }

    /// Classifies the edge `u -> v` where both endpoints are attached.
    pub fn classify(&self, u: Node, v: Node) -> EdgeKind {
        let (shallow, mut deep) = if self.level_of(u) < self.level_of(v) {
            (u, v)
        } else {
            (v, u)
        };

        while self.level_of(deep) > self.level_of(shallow) {
            deep = self.parent_of(deep);
        }

        if deep == shallow {
            EdgeKind::Back
        } else {
            EdgeKind::Cross
        }
    }

    /// Consumes the forest and returns the level of every node
    pub fn into_levels(self) -> Vec<Level> {
        self.levels
    }
}
