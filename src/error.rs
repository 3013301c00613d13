/*!
# Errors

Every failure of this crate is an *invalid input* failure: traversals perform no I/O and have no
transient state, so errors are raised immediately and never retried. The variants only refine the
message.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised while resolving a traversal request or starting a walk.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// The graph (or the `nodes` field of an options object) is not an ordered sequence
    #[error("The list of nodes must be an array, got {0}")]
    NotASequence(&'static str),

    /// The options object could not be interpreted
    #[error("Invalid traversal options: {0}")]
    InvalidConfig(String),

    /// A node identity outside `0..len` was referenced
    #[error("Node {node} is out of range for a graph with {len} nodes")]
    NodeOutOfRange { node: Node, len: NumNodes },

    /// An adjacency list contains an element that is not a node identity
    #[error("The adjacency list of node {node} contains {value}, which is not a node")]
    InvalidNeighbor { node: Node, value: String },

    /// The input could not be parsed as JSON
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl TraversalError {
    /// All variants belong to the single *invalid input* kind
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TraversalError::NotASequence(_)
                | TraversalError::InvalidConfig(_)
                | TraversalError::NodeOutOfRange { .. }
                | TraversalError::InvalidNeighbor { .. }
                | TraversalError::InvalidJson(_)
        )
    }
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, TraversalError>;
