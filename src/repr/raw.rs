/*!
# Untrusted Adjacency Input

Adjacency lists handed over by a host application are not always well-formed. Every entry is
coerced independently:
- a list of node identities is kept as-is,
- a bare node identity becomes a one-element list,
- anything else that is not a number (`null`, a missing entry, strings, objects, ...) becomes an
  empty list.

A node identity may be spelled as an integer or as an integral float (`3` or `3.0`). Numbers that
are not node identities (negative, fractional, too large) and non-numeric elements inside a list
are rejected with [`TraversalError::InvalidNeighbor`] rather than dropped, so a neighbor is never
lost silently.

Only the top-level value must be an ordered sequence; entries below it are coerced as above.
*/

use serde::{Deserialize, de::IgnoredAny};
use serde_json::Value;

use super::AdjArray;
use crate::*;

/// One element of an adjacency list before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Id(Node),
    /// A number that is not a plain `u32`, e.g. `1.0` or `-1`
    Number(f64),
    Other(Value),
}

impl RawNode {
    /// Converts the element into a node identity; `owner` is the node whose list contains it
    pub fn into_node(self, owner: Node) -> Result<Node> {
        match self {
            RawNode::Id(v) => Ok(v),
            RawNode::Number(x) => node_from_f64(x, owner),
            RawNode::Other(value) => Err(TraversalError::InvalidNeighbor {
                node: owner,
                value: json_kind(&value).to_string(),
            }),
        }
    }
}

fn node_from_f64(x: f64, owner: Node) -> Result<Node> {
    if x.fract() == 0.0 && (0.0..INVALID_NODE as f64).contains(&x) {
        Ok(x as Node)
    } else {
        Err(TraversalError::InvalidNeighbor {
            node: owner,
            value: x.to_string(),
        })
    }
}

/// One node's adjacency entry before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAdjacency {
    /// A neighbor list; its elements are validated one by one
    Many(Vec<RawNode>),
    /// A single neighbor given without surrounding list
    One(Node),
    /// A single neighbor spelled as a non-`u32` number
    Number(f64),
    /// `null` or an absent entry
    Missing,
    /// Any value that is neither of the above
    Garbage(IgnoredAny),
}

impl RawAdjacency {
    /// Coerces the entry of node `owner` into an ordered neighbor list.
    ///
    /// # Errors
    /// Fails with [`TraversalError::InvalidNeighbor`] if the entry contains a number or a list
    /// element that is not a node identity.
    pub fn into_neighborhood(self, owner: Node) -> Result<Vec<Node>> {
        match self {
            RawAdjacency::Many(nbs) => nbs.into_iter().map(|v| v.into_node(owner)).collect(),
            RawAdjacency::One(v) => Ok(vec![v]),
            RawAdjacency::Number(x) => Ok(vec![node_from_f64(x, owner)?]),
            RawAdjacency::Missing | RawAdjacency::Garbage(_) => Ok(Vec::new()),
        }
    }
}

impl From<Vec<Node>> for RawAdjacency {
    fn from(nbs: Vec<Node>) -> Self {
        RawAdjacency::Many(nbs.into_iter().map(RawNode::Id).collect())
    }
}

impl From<Node> for RawAdjacency {
    fn from(v: Node) -> Self {
        RawAdjacency::One(v)
    }
}

impl From<Option<Node>> for RawAdjacency {
    fn from(v: Option<Node>) -> Self {
        v.map_or(RawAdjacency::Missing, RawAdjacency::One)
    }
}

/// Describes the JSON type of `value` for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl AdjArray {
    /// Builds a graph from a JSON array of adjacency entries.
    ///
    /// If `trusted` is *false*, every entry is coerced as described in the [module](self)
    /// documentation and all targets are range-checked. If `trusted` is *true*, entries are taken
    /// as plain lists of node identities without coercion or range checks.
    ///
    /// # Errors
    /// Fails with [`TraversalError::NotASequence`] if `value` is not an array.
    ///
    /// # Examples
    /// ```
    /// use traversals::{prelude::*, repr::AdjArray};
    /// use serde_json::json;
    ///
    /// let dirty = AdjArray::from_json(&json!([[1, 2], 2, null]), false).unwrap();
    /// let clean = AdjArray::from_neighborhoods(vec![vec![1, 2], vec![2], vec![]]);
    /// assert_eq!(dirty, clean);
    ///
    /// assert!(AdjArray::from_json(&json!("hello"), false).is_err());
    /// ```
    pub fn from_json(value: &Value, trusted: bool) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(TraversalError::NotASequence(json_kind(value)));
        };

        if trusted {
            let out_nbs = entries
                .iter()
                .map(Vec::<Node>::deserialize)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            return Ok(Self::from_neighborhoods(out_nbs));
        }

        let raw = entries
            .iter()
            .map(RawAdjacency::deserialize)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_raw(raw)
    }

    /// Parses `json` and builds a graph from it, see [`AdjArray::from_json`]
    pub fn from_json_str(json: &str, trusted: bool) -> Result<Self> {
        Self::from_json(&serde_json::from_str(json)?, trusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use serde_json::json;

    #[test]
    fn entries_coerce() {
        let parse = |v: Value| RawAdjacency::deserialize(&v).unwrap().into_neighborhood(0);

        assert_eq!(parse(json!([4, 5])).unwrap(), vec![4, 5]);
        assert_eq!(parse(json!(6)).unwrap(), vec![6]);
        assert_eq!(parse(json!(null)).unwrap(), Vec::<Node>::new());
        assert_eq!(parse(json!("six")).unwrap(), Vec::<Node>::new());
        assert_eq!(parse(json!({"to": 3})).unwrap(), Vec::<Node>::new());
        assert_eq!(parse(json!([])).unwrap(), Vec::<Node>::new());
    }

    #[test]
    fn integral_floats_are_nodes() {
        let parse = |v: Value| RawAdjacency::deserialize(&v).unwrap().into_neighborhood(0);

        assert_eq!(parse(json!(1.0)).unwrap(), vec![1]);
        assert_eq!(parse(json!([2.0, 3])).unwrap(), vec![2, 3]);

        let graph = AdjArray::from_json(&json!([1.0, []]), false).unwrap();
        assert_eq!(graph.as_lists(), &[vec![1], vec![]]);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        for entry in [json!(-1), json!(1.5), json!(5e12)] {
            let err = AdjArray::from_json(&json!([[], entry]), false).unwrap_err();
            assert!(matches!(err, TraversalError::InvalidNeighbor { node: 1, .. }));
        }
    }

    #[test]
    fn invalid_list_elements_are_rejected() {
        let err = AdjArray::from_json(&json!([[1, -1], []]), false).unwrap_err();
        assert!(matches!(err, TraversalError::InvalidNeighbor { node: 0, .. }));
        assert!(err.is_invalid_input());

        let err = AdjArray::from_json(&json!([[], [0, "one"]]), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The adjacency list of node 1 contains a string, which is not a node"
        );
    }

    #[test]
    fn dirty_graph_equals_clean_graph() {
        let dirty = AdjArray::from_json(&irregular_cyclic_json(), false).unwrap();
        assert_eq!(dirty, AdjArray::from_neighborhoods(cyclic_graph()));
    }

    #[test]
    fn top_level_must_be_sequence() {
        for value in [json!("hello"), json!(null), json!(3), json!({"nodes": []})] {
            let err = AdjArray::from_json(&value, false).unwrap_err();
            assert!(matches!(err, TraversalError::NotASequence(_)));
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn out_of_range_targets_are_rejected() {
        let err = AdjArray::from_json(&json!([[1], 7]), false).unwrap_err();
        assert!(matches!(
            err,
            TraversalError::NodeOutOfRange { node: 7, len: 2 }
        ));
    }

    #[test]
    fn trusted_input_is_not_coerced() {
        let graph = AdjArray::from_json(&json!([[1], [0, 1]]), true).unwrap();
        assert_eq!(graph.as_lists(), &[vec![1], vec![0, 1]]);

        assert!(AdjArray::from_json(&json!([[1], 0]), true).is_err());
    }

    #[test]
    fn from_str() {
        let graph = AdjArray::from_json_str("[[1, 8], 3, null]", false);
        assert!(matches!(
            graph,
            Err(TraversalError::NodeOutOfRange { node: 8, len: 3 })
        ));
        assert!(matches!(
            AdjArray::from_json_str("[[1]", false),
            Err(TraversalError::InvalidJson(_))
        ));
    }
}
