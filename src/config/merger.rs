//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Null values in the overlay delete the key from the base
//! - Anything else in the overlay replaces the base value

use serde_yaml::Value;

/// Deep merge `overlay` onto `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order; the last layer has the highest priority.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let merged = deep_merge(
            &yaml("generator:\n  length: 16"),
            &yaml("generator:\n  length: 19"),
        );
        assert_eq!(merged["generator"]["length"], 19);
    }

    #[test]
    fn sibling_keys_survive() {
        let merged = deep_merge(
            &yaml("generator:\n  length: 16\n  prefix: '4'"),
            &yaml("generator:\n  prefix: '51'"),
        );
        assert_eq!(merged["generator"]["length"], 16);
        assert_eq!(merged["generator"]["prefix"], "51");
    }

    #[test]
    fn null_deletes_key() {
        let merged = deep_merge(
            &yaml("probe:\n  api_base: http://x\naudit:\n  enabled: true"),
            &yaml("probe: ~"),
        );
        assert!(merged.get("probe").is_none());
        assert_eq!(merged["audit"]["enabled"], true);
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let merged = merge_configs(&[
            yaml("generator:\n  count: 1"),
            yaml("generator:\n  count: 5"),
            yaml("generator:\n  count: 9"),
        ]);
        assert_eq!(merged["generator"]["count"], 9);
    }

    #[test]
    fn merge_configs_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
