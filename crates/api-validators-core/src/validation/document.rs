//! Dot-path lookup into nested JSON documents.

use serde_json::Value;

use crate::error::{AssertionError, Result};

/// Resolve `key_path` (e.g. `user.address.city`) inside `document`.
///
/// Each `.`-separated segment must name a key of a JSON object at that depth.
/// Arrays and scalars are never descended into, so `items.0` fails at `0`.
/// Returns a borrow of the resolved value.
pub fn json_should_contain_nested_key<'a>(document: &'a Value, key_path: &str) -> Result<&'a Value> {
    let mut current = document;

    for segment in key_path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            _ => None,
        };

        current = match next {
            Some(value) => value,
            None => {
                tracing::debug!(path = key_path, segment, "nested key lookup failed");
                return Err(AssertionError::NestedKeyNotFound {
                    path: key_path.to_string(),
                    segment: segment.to_string(),
                });
            }
        };
    }

    tracing::trace!(path = key_path, "nested key resolved");
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user() -> Value {
        json!({
            "user": {
                "address": { "city": "NYC", "geo": { "lat": 40.7 } },
                "tags": ["a", "b"],
                "nickname": null
            }
        })
    }

    #[test]
    fn test_resolves_leaf_value() {
        let doc = user();
        assert_eq!(
            json_should_contain_nested_key(&doc, "user.address.city").unwrap(),
            &json!("NYC")
        );
        assert_eq!(
            json_should_contain_nested_key(&doc, "user.address.geo.lat").unwrap(),
            &json!(40.7)
        );
    }

    #[test]
    fn test_resolves_intermediate_object() {
        let doc = user();
        assert_eq!(
            json_should_contain_nested_key(&doc, "user.address").unwrap(),
            &doc["user"]["address"]
        );
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let doc = user();
        assert_eq!(
            json_should_contain_nested_key(&doc, "user.nickname").unwrap(),
            &Value::Null
        );
    }

    #[test]
    fn test_missing_segment_is_named() {
        let doc = user();
        let err = json_should_contain_nested_key(&doc, "user.zip").unwrap_err();
        assert_eq!(
            err,
            AssertionError::NestedKeyNotFound {
                path: "user.zip".into(),
                segment: "zip".into(),
            }
        );
    }

    #[test]
    fn test_scalar_mid_path_fails_instead_of_panicking() {
        let doc = user();
        let err = json_should_contain_nested_key(&doc, "user.address.city.name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nested key 'user.address.city.name' not found in JSON. Failed at 'name'"
        );
    }

    #[test]
    fn test_arrays_are_not_indexed() {
        let doc = user();
        let err = json_should_contain_nested_key(&doc, "user.tags.0").unwrap_err();
        assert!(matches!(
            err,
            AssertionError::NestedKeyNotFound { ref segment, .. } if segment == "0"
        ));
    }

    #[test]
    fn test_non_object_root_fails_at_first_segment() {
        let err = json_should_contain_nested_key(&json!([1, 2]), "user").unwrap_err();
        assert!(err.to_string().ends_with("Failed at 'user'"));
    }

    #[test]
    fn test_empty_segment_is_a_literal_key() {
        let doc = json!({ "": { "a": 1 } });
        assert_eq!(json_should_contain_nested_key(&doc, ".a").unwrap(), &json!(1));

        let err = json_should_contain_nested_key(&json!({ "a": 1 }), "").unwrap_err();
        assert!(err.to_string().ends_with("Failed at ''"));
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let doc = user();
        let first = json_should_contain_nested_key(&doc, "user.zip");
        let second = json_should_contain_nested_key(&doc, "user.zip");
        assert_eq!(first, second);
    }
}
