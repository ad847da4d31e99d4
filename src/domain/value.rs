//! Open hyperparameter value tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single node in an open hyperparameter configuration tree.
///
/// Consuming algorithms define their own hyperparameter sets, so the tree is
/// fully generic: scalar leaves, sequences, and nested mappings. Numeric
/// leaves keep their integer/float distinction so a re-serialized tree reads
/// back identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of the leaf; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(value) => Some(*value as f64),
            ParamValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Look up a key in a mapping node.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        match self {
            ParamValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ParamValue {
        let mut model = BTreeMap::new();
        model.insert(
            "fcnet_hiddens".to_string(),
            ParamValue::Sequence(vec![ParamValue::Int(32), ParamValue::Int(32)]),
        );
        model.insert("vf_share_layers".to_string(), ParamValue::Bool(true));

        let mut root = BTreeMap::new();
        root.insert("gamma".to_string(), ParamValue::Float(0.99));
        root.insert("num_workers".to_string(), ParamValue::Int(16));
        root.insert("observation_filter".to_string(), ParamValue::String("MeanStdFilter".into()));
        root.insert("model".to_string(), ParamValue::Map(model));
        root.insert("seed".to_string(), ParamValue::Null);
        ParamValue::Map(root)
    }

    #[test]
    fn accessors() {
        let tree = sample_tree();
        assert_eq!(tree.get("num_workers").and_then(ParamValue::as_i64), Some(16));
        assert_eq!(tree.get("gamma").and_then(ParamValue::as_f64), Some(0.99));
        assert_eq!(
            tree.get("observation_filter").and_then(ParamValue::as_str),
            Some("MeanStdFilter")
        );
        assert_eq!(
            tree.get("model").and_then(|m| m.get("vf_share_layers")).and_then(ParamValue::as_bool),
            Some(true)
        );
        assert!(tree.get("seed").is_some_and(ParamValue::is_null));
        assert!(tree.get("missing").is_none());
    }

    #[test]
    fn int_widens_to_f64() {
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
    }

    #[test]
    fn yaml_round_trip_preserves_tree() {
        let tree = sample_tree();
        let text = serde_yaml::to_string(&tree).unwrap();
        let reloaded: ParamValue = serde_yaml::from_str(&text).unwrap();
        assert_eq!(tree, reloaded);
    }

    #[test]
    fn int_and_float_stay_distinct_through_yaml() {
        let text = serde_yaml::to_string(&ParamValue::Float(2.0)).unwrap();
        let reloaded: ParamValue = serde_yaml::from_str(&text).unwrap();
        assert_eq!(reloaded, ParamValue::Float(2.0));

        let text = serde_yaml::to_string(&ParamValue::Int(2)).unwrap();
        let reloaded: ParamValue = serde_yaml::from_str(&text).unwrap();
        assert_eq!(reloaded, ParamValue::Int(2));
    }

    use proptest::prelude::*;

    fn param_value_strategy() -> impl Strategy<Value = ParamValue> {
        let leaf = prop_oneof![
            Just(ParamValue::Null),
            any::<bool>().prop_map(ParamValue::Bool),
            any::<i64>().prop_map(ParamValue::Int),
            (-1.0e9f64..1.0e9).prop_map(ParamValue::Float),
            "[a-z][a-z0-9_]{0,10}".prop_map(ParamValue::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(ParamValue::Sequence),
                prop::collection::btree_map("[a-z][a-z0-9_]{0,10}", inner, 0..4)
                    .prop_map(ParamValue::Map),
            ]
        })
    }

    proptest! {
        #[test]
        fn any_tree_survives_yaml_round_trip(tree in param_value_strategy()) {
            let text = serde_yaml::to_string(&tree).unwrap();
            let reloaded: ParamValue = serde_yaml::from_str(&text).unwrap();
            prop_assert_eq!(tree, reloaded);
        }
    }
}
