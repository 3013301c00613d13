//! Reference graphs and seeded random graphs shared by the unit tests

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde_json::{Value, json};

use crate::*;

/// Depth-first pre-order of [`cyclic_graph`] from node `0`
pub const CYCLIC_PRE_ORDER: [Node; 9] = [0, 1, 2, 3, 4, 6, 7, 8, 5];

/// Depth-first post-order of [`cyclic_graph`] from node `0`
pub const CYCLIC_POST_ORDER: [Node; 9] = [8, 7, 6, 4, 5, 3, 2, 1, 0];

/// Nine nodes with every edge kind reachable from node `0`:
/// back `6 -> 2`, forward `1 -> 3` and `0 -> 8`, cross `5 -> 6`
pub fn cyclic_graph() -> Vec<Vec<Node>> {
    vec![
        vec![1, 8],
        vec![2, 3],
        vec![3],
        vec![4, 5],
        vec![6],
        vec![6],
        vec![7, 2],
        vec![8],
        vec![],
    ]
}

/// [`cyclic_graph`] written with bare numbers and a missing entry
pub fn irregular_cyclic_json() -> Value {
    json!([[1, 8], [2, 3], 3, [4, 5], 6, 6, [7, 2], [8], null])
}

/// [`cyclic_graph`] with `6 -> [4, 7, 2]`, yielding a breadth-first back edge `6 -> 4`
pub fn bfs_back_edge_graph() -> Vec<Vec<Node>> {
    let mut graph = cyclic_graph();
    graph[6] = vec![4, 7, 2];
    graph
}

/// Returns `count` random graphs with `1..=30` nodes each.
/// Self-loops and duplicate entries are allowed.
pub fn random_graphs(seed: u64, count: usize) -> Vec<(NumNodes, Vec<Vec<Node>>)> {
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let n: NumNodes = rng.random_range(1..=30);
            let graph: Vec<Vec<Node>> = (0..n)
                .map(|_| {
                    let degree = rng.random_range(0..4);
                    (0..degree).map(|_| rng.random_range(0..n)).collect::<Vec<Node>>()
                })
                .collect();
            (n, graph)
        })
        .collect()
}
