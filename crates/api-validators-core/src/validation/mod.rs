//! Validation keywords for API response assertions.
//!
//! Every function here is read-only: it inspects its arguments and either
//! returns a success value or an [`AssertionError`](crate::AssertionError).

pub mod document;
pub mod format;
pub mod records;
pub mod timing;

pub use document::json_should_contain_nested_key;
pub use format::{validate_email_format, validate_iso_date_format, validate_url_format};
pub use records::{
    extract_ids, extract_ids_from_list, list_should_contain_item_with_field, DEFAULT_ID_FIELD,
};
pub use timing::{validate_response_time, Elapsed, ResponseTiming};
