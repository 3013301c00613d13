use serde::Deserialize;

use super::*;

/// Options of a classified traversal.
///
/// Configure either via the setters (`set_*`, or the consuming builder variants) or by
/// deserializing a JSON options object with camelCase keys (`startIndex`, `spanningTree`,
/// `preOrder`, `postOrder`, `rPreOrder`, `rPostOrder`, `edges`, `excludeRoot`, `trusted`,
/// `flat`). Missing keys keep their default; unknown keys are ignored.
///
/// # Examples
/// ```
/// use traversals::algo::TraversalConfig;
///
/// let config = TraversalConfig::default()
///     .start_index(-1)
///     .spanning_tree(false)
///     .r_post_order(true);
///
/// assert_eq!(config.start_index, -1);
/// assert!(config.pre_order && config.post_order && config.edges);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraversalConfig {
    /// Root to begin at; wraps modulo the number of nodes, negative values count from the end
    pub start_index: i64,
    /// Only traverse the component reachable from the start node
    pub spanning_tree: bool,
    pub pre_order: bool,
    /// For breadth-first traversals this selects the per-node levels instead
    pub post_order: bool,
    pub r_pre_order: bool,
    pub r_post_order: bool,
    /// Collect classified edges into the result
    pub edges: bool,
    /// Suppress node hooks for sub-traversal roots; only applies in spanning-forest mode
    pub exclude_root: bool,
    /// Skip coercion and range checks of JSON input
    pub trusted: bool,
    /// Use the iterative depth-first walker
    pub flat: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            spanning_tree: true,
            pre_order: true,
            post_order: true,
            r_pre_order: false,
            r_post_order: false,
            edges: true,
            exclude_root: false,
            trusted: false,
            flat: false,
        }
    }
}

macro_rules! config_setters {
    ($($field:ident, $setter:ident : $type:ty;)*) => {
        impl TraversalConfig {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`")]
                pub fn $setter(&mut self, value: $type) {
                    self.$field = value;
                }

                #[doc = concat!("Sets `", stringify!($field), "` and returns the configuration")]
                pub fn $field(mut self, value: $type) -> Self {
                    self.$setter(value);
                    self
                }
            )*
        }
    };
}

config_setters! {
    start_index, set_start_index: i64;
    spanning_tree, set_spanning_tree: bool;
    pre_order, set_pre_order: bool;
    post_order, set_post_order: bool;
    r_pre_order, set_r_pre_order: bool;
    r_post_order, set_r_post_order: bool;
    edges, set_edges: bool;
    exclude_root, set_exclude_root: bool;
    trusted, set_trusted: bool;
    flat, set_flat: bool;
}

impl TraversalConfig {
    /// Parses a JSON options object; `null` yields the defaults.
    ///
    /// # Errors
    /// Fails with [`TraversalError::InvalidConfig`] if `value` is neither an object nor `null`,
    /// or if a known key has the wrong type.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(_) => Self::deserialize(value)
                .map_err(|e| TraversalError::InvalidConfig(e.to_string())),
            other => Err(TraversalError::InvalidConfig(format!(
                "options must be an object, got {}",
                crate::repr::raw::json_kind(other)
            ))),
        }
    }

    /// Returns *true* if a reversed pre-order is needed for the result or for `visitor`
    pub(crate) fn needs_r_pre_order<V: TraversalVisitor>(&self, visitor: &V) -> bool {
        self.r_pre_order || visitor.observes_nodes()
    }

    /// Returns *true* if a reversed post-order is needed for the result or for `visitor`
    pub(crate) fn needs_r_post_order<V: TraversalVisitor>(&self, visitor: &V) -> bool {
        self.r_post_order || visitor.observes_nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = TraversalConfig::default();
        assert_eq!(config.start_index, 0);
        assert!(config.spanning_tree);
        assert!(config.pre_order && config.post_order && config.edges);
        assert!(!config.r_pre_order && !config.r_post_order);
        assert!(!config.exclude_root && !config.trusted && !config.flat);

        assert_eq!(TraversalConfig::from_json(&json!(null)).unwrap(), config);
        assert_eq!(TraversalConfig::from_json(&json!({})).unwrap(), config);
    }

    #[test]
    fn camel_case_keys() {
        let config = TraversalConfig::from_json(&json!({
            "startIndex": -9,
            "spanningTree": false,
            "preOrder": false,
            "rPostOrder": true,
            "excludeRoot": true,
            "flat": true,
            "pre": "callbacks are not options"
        }))
        .unwrap();

        assert_eq!(
            config,
            TraversalConfig::default()
                .start_index(-9)
                .spanning_tree(false)
                .pre_order(false)
                .r_post_order(true)
                .exclude_root(true)
                .flat(true)
        );
    }

    #[test]
    fn setters() {
        let mut config = TraversalConfig::default();
        config.set_edges(false);
        config.set_trusted(true);
        assert!(!config.edges);
        assert!(config.trusted);
    }

    #[test]
    fn bad_options() {
        assert!(matches!(
            TraversalConfig::from_json(&json!(12)),
            Err(TraversalError::InvalidConfig(_))
        ));
        assert!(matches!(
            TraversalConfig::from_json(&json!({"spanningTree": "yes"})),
            Err(TraversalError::InvalidConfig(_))
        ));
    }
}
