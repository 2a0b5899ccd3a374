//! The single failure kind raised by every validation keyword.

use thiserror::Error;

/// Convenience alias used by every operation in [`crate::validation`].
pub type Result<T> = std::result::Result<T, AssertionError>;

/// A validation did not hold.
///
/// Every variant renders as the human-readable message a test runner reports
/// for the failed step. The structured fields are kept so callers can inspect
/// the failure without parsing the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    #[error("'{value}' is not a valid email format")]
    InvalidEmail { value: String },

    #[error("'{value}' is not a valid URL format")]
    InvalidUrl { value: String },

    #[error("Nested key '{path}' not found in JSON. Failed at '{segment}'")]
    NestedKeyNotFound { path: String, segment: String },

    #[error("Response time {elapsed_ms:.2}ms exceeds maximum allowed {max_ms}ms")]
    ResponseTooSlow { elapsed_ms: f64, max_ms: u64 },

    /// `value` is already rendered: bare text for strings, compact JSON otherwise.
    #[error("No item found with {field}='{value}' in list of {scanned} items")]
    NoMatchingItem {
        field: String,
        value: String,
        scanned: usize,
    },

    #[error("'{value}' is not in ISO 8601 date format")]
    InvalidIsoDate { value: String },
}

impl AssertionError {
    /// The rendered failure message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_latency_message_uses_two_decimals() {
        let err = AssertionError::ResponseTooSlow {
            elapsed_ms: 1500.0,
            max_ms: 1000,
        };
        assert_eq!(
            err.message(),
            "Response time 1500.00ms exceeds maximum allowed 1000ms"
        );
    }

    #[test]
    fn test_nested_key_message_names_path_and_segment() {
        let err = AssertionError::NestedKeyNotFound {
            path: "user.zip".into(),
            segment: "zip".into(),
        };
        assert_eq!(
            err.to_string(),
            "Nested key 'user.zip' not found in JSON. Failed at 'zip'"
        );
    }

    #[test]
    fn test_no_matching_item_message() {
        let err = AssertionError::NoMatchingItem {
            field: "name".into(),
            value: "C".into(),
            scanned: 2,
        };
        assert_eq!(
            err.to_string(),
            "No item found with name='C' in list of 2 items"
        );
    }
}
