/*!
JSON entry point for hosts that hand over graphs and options as loosely-typed values.

A host may call a traversal in three shapes:
- `(nodes, options)` where `nodes` is an array of adjacency entries,
- `(options)` where the options object carries its own `nodes` array,
- `(placeholder, options)` where the first argument is neither array nor object and the options
  object carries the `nodes` array,
- `(placeholder)` alone, meaning "use the defaults on an empty graph".

[`TraversalInput`] names these shapes explicitly; [`TraversalRequest`] is the canonical form the
driver runs on.
*/

use serde_json::Value;

use super::*;
use crate::repr::raw::json_kind;

/// A traversal call as received from a host, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalInput {
    /// Node list and (possibly absent) options passed separately
    Graph { nodes: Value, options: Value },
    /// Options object that embeds its node list under the key `nodes`
    Embedded(Value),
    /// Nothing usable was passed; run with defaults on an empty graph
    Defaults,
}

impl TraversalInput {
    /// Determines the call shape from the first and (optional) second argument.
    ///
    /// An object as first argument is the options object itself; a second argument is then
    /// ignored. Any other first argument is a placeholder that defers to the options object.
    ///
    /// # Errors
    /// Fails with [`TraversalError::InvalidConfig`] if `list` is a placeholder and `options` is
    /// present but neither an object nor `null`.
    pub fn from_json(list: Value, options: Option<Value>) -> Result<Self> {
        match (list, options) {
            (nodes @ Value::Array(_), options) => Ok(Self::Graph {
                nodes,
                options: options.unwrap_or(Value::Null),
            }),
            (options @ Value::Object(_), _) => Ok(Self::Embedded(options)),
            (_, Some(options @ Value::Object(_))) => Ok(Self::Embedded(options)),
            (_, None | Some(Value::Null)) => Ok(Self::Defaults),
            (_, Some(other)) => Err(TraversalError::InvalidConfig(format!(
                "options must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Normalizes configuration and graph into a [`TraversalRequest`].
    ///
    /// The graph is coerced entry by entry unless the options set `trusted`.
    pub fn resolve(self) -> Result<TraversalRequest> {
        match self {
            Self::Graph { nodes, options } => {
                let config = TraversalConfig::from_json(&options)?;
                let graph = AdjArray::from_json(&nodes, config.trusted)?;
                Ok(TraversalRequest { graph, config })
            }
            Self::Embedded(options) => {
                let config = TraversalConfig::from_json(&options)?;
                let graph = match options.get("nodes") {
                    None | Some(Value::Null) => AdjArray::default(),
                    Some(nodes) => AdjArray::from_json(nodes, config.trusted)?,
                };
                Ok(TraversalRequest { graph, config })
            }
            Self::Defaults => Ok(TraversalRequest::default()),
        }
    }
}

/// A normalized graph together with the configuration to traverse it with.
///
/// # Examples
/// ```
/// use traversals::algo::TraversalRequest;
/// use serde_json::json;
///
/// let request = TraversalRequest::from_json(
///     json!([[1, 8], [2, 3], 3, [4, 5], 6, 6, [7, 2], [8], null]),
///     Some(json!({"rPostOrder": true})),
/// )
/// .unwrap();
///
/// let result = request.dfs();
/// assert_eq!(result.pre_order.unwrap(), vec![0, 1, 2, 3, 4, 6, 7, 8, 5]);
/// assert_eq!(result.r_post_order.unwrap(), vec![0, 1, 2, 3, 5, 4, 6, 7, 8]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalRequest {
    pub graph: AdjArray,
    pub config: TraversalConfig,
}

impl TraversalRequest {
    pub fn new(graph: AdjArray, config: TraversalConfig) -> Self {
        Self { graph, config }
    }

    /// Shorthand for [`TraversalInput::from_json`] followed by [`TraversalInput::resolve`]
    pub fn from_json(list: Value, options: Option<Value>) -> Result<Self> {
        TraversalInput::from_json(list, options)?.resolve()
    }

    /// Parses the node list and options from JSON text
    pub fn from_json_str(list: &str, options: Option<&str>) -> Result<Self> {
        let list: Value = serde_json::from_str(list)?;
        let options = options.map(serde_json::from_str::<Value>).transpose()?;
        Self::from_json(list, options)
    }

    pub fn dfs(&self) -> TraversalResult {
        self.graph.depth_first(&self.config)
    }

    pub fn dfs_with<V: TraversalVisitor>(&self, visitor: &mut V) -> TraversalResult {
        self.graph.depth_first_with(&self.config, visitor)
    }

    pub fn bfs(&self) -> TraversalResult {
        self.graph.breadth_first(&self.config)
    }

    pub fn bfs_with<V: TraversalVisitor>(&self, visitor: &mut V) -> TraversalResult {
        self.graph.breadth_first_with(&self.config, visitor)
    }
}
