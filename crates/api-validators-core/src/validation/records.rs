//! Searching and projecting lists of JSON records.

use serde_json::Value;

use crate::error::{AssertionError, Result};

/// Field read by [`extract_ids`].
pub const DEFAULT_ID_FIELD: &str = "id";

/// Return the first object in `items` whose `field_name` equals `field_value`.
///
/// Comparison is `serde_json::Value` equality, so `1` and `1.0` or `"1"` and
/// `1` are different values. An object without `field_name` compares as
/// `null`. Elements that are not objects are skipped.
pub fn list_should_contain_item_with_field<'a>(
    items: &'a [Value],
    field_name: &str,
    field_value: &Value,
) -> Result<&'a Value> {
    let found = items.iter().find(|item| match item {
        Value::Object(map) => map.get(field_name).unwrap_or(&Value::Null) == field_value,
        _ => false,
    });

    match found {
        Some(item) => {
            tracing::trace!(field = field_name, "matching item found");
            Ok(item)
        }
        None => {
            tracing::debug!(
                field = field_name,
                value = %field_value,
                scanned = items.len(),
                "no matching item"
            );
            Err(AssertionError::NoMatchingItem {
                field: field_name.to_string(),
                value: render_value(field_value),
                scanned: items.len(),
            })
        }
    }
}

/// Collect `field_name` from every object in `items`, in order.
///
/// Objects without the field contribute `None`; non-object elements
/// contribute nothing.
pub fn extract_ids_from_list<'a>(items: &'a [Value], field_name: &str) -> Vec<Option<&'a Value>> {
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| map.get(field_name))
        .collect()
}

/// [`extract_ids_from_list`] with the default `id` field.
pub fn extract_ids(items: &[Value]) -> Vec<Option<&Value>> {
    extract_ids_from_list(items, DEFAULT_ID_FIELD)
}

/// Strings render bare, everything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
