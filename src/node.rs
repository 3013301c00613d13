/*!
# Node Representation

Nodes are plain `u32` identities in `0..n`, where a node's identity is its position in the
adjacency list. Using `u32` instead of `usize` halves the size of every order/level table the
traversals produce, and graphs handled here never approach `2^32` nodes.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as "not assigned" marker in per-node tables (parents, levels, discovery numbers).
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Distance (in edges) of a node from the root of its breadth-first tree
pub type Level = NumNodes;

/// Wraps a possibly negative or out-of-range start index into `0..n`.
///
/// Negative values count from the end, so `-1` is the last node and `-n` is node `0`.
/// Returns `None` for an empty graph.
///
/// # Examples
/// ```
/// use traversals::node::wrap_index;
///
/// assert_eq!(wrap_index(0, 9), Some(0));
/// assert_eq!(wrap_index(11, 9), Some(2));
/// assert_eq!(wrap_index(-9, 9), Some(0));
/// assert_eq!(wrap_index(-1, 9), Some(8));
/// assert_eq!(wrap_index(3, 0), None);
/// ```
pub fn wrap_index(index: i64, n: NumNodes) -> Option<Node> {
    (n > 0).then(|| index.rem_euclid(n as i64) as Node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_is_modular() {
        for n in 1..20 {
            for i in -50i64..50 {
                let u = wrap_index(i, n).unwrap();
                assert!(u < n);
                assert_eq!((u as i64 - i) % n as i64, 0);
            }
        }
    }
}
