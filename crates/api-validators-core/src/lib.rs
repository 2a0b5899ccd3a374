//! # api-validators-core
//!
//! Stateless assertion keywords for API test suites.
//!
//! Each function inspects one value (a string, a JSON document, or a list of
//! JSON records) and either returns a success value or an
//! [`AssertionError`] describing what was expected and what was found. A
//! test runner treats any `AssertionError` as a failed step.
//!
//! ## Example
//!
//! ```
//! use api_validators_core::{json_should_contain_nested_key, validate_email_format};
//! use serde_json::json;
//!
//! assert_eq!(validate_email_format("user@example.com"), Ok(true));
//! assert!(validate_email_format("not-an-email").is_err());
//!
//! let doc = json!({"user": {"address": {"city": "NYC"}}});
//! assert_eq!(
//!     json_should_contain_nested_key(&doc, "user.address.city").unwrap(),
//!     &json!("NYC")
//! );
//! ```
//!
//! Framework bindings address the same operations by keyword name through
//! [`Keyword`]:
//!
//! ```
//! use api_validators_core::Keyword;
//! use serde_json::json;
//!
//! let keyword: Keyword = "Validate ISO Date Format".parse().unwrap();
//! assert_eq!(keyword.run(&[json!("2024-01-15T10:30:00Z")]), Ok(json!(true)));
//! ```

pub mod error;
pub mod keyword;
pub mod validation;

pub use error::{AssertionError, Result};
pub use keyword::{Keyword, KeywordError, KeywordInfo, LIBRARY_SCOPE, LIBRARY_VERSION};
pub use validation::{
    extract_ids, extract_ids_from_list, json_should_contain_nested_key,
    list_should_contain_item_with_field, validate_email_format, validate_iso_date_format,
    validate_response_time, validate_url_format, Elapsed, ResponseTiming, DEFAULT_ID_FIELD,
};
