//! String format checks: email, URL, and ISO 8601 timestamps.
//!
//! The URL and ISO date patterns are anchored only at the start. Anything
//! after the matched prefix (paths, query strings, fractional seconds,
//! offsets) is accepted without inspection.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AssertionError, Result};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\n?$").expect("valid email regex")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid url regex")
});

static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("valid iso date regex")
});

/// Assert that `email` looks like `local-part@domain.tld`.
///
/// The local part allows letters, digits and `._%+-`; the domain allows
/// letters, digits, `.` and `-`; the final label must be at least two
/// letters. One trailing newline is tolerated.
pub fn validate_email_format(email: &str) -> Result<bool> {
    if !EMAIL_REGEX.is_match(email) {
        tracing::debug!(value = email, "email format rejected");
        return Err(AssertionError::InvalidEmail {
            value: email.to_string(),
        });
    }
    Ok(true)
}

/// Assert that `url` starts with an `http`/`https` scheme and a dotted host.
pub fn validate_url_format(url: &str) -> Result<bool> {
    if !URL_REGEX.is_match(url) {
        tracing::debug!(value = url, "url format rejected");
        return Err(AssertionError::InvalidUrl {
            value: url.to_string(),
        });
    }
    Ok(true)
}

/// Assert that `date` begins with `YYYY-MM-DDTHH:MM:SS`.
///
/// Field ranges are not checked: `2024-13-45T99:00:00` passes.
pub fn validate_iso_date_format(date: &str) -> Result<bool> {
    if !ISO_DATE_REGEX.is_match(date) {
        tracing::debug!(value = date, "iso date format rejected");
        return Err(AssertionError::InvalidIsoDate {
            value: date.to_string(),
        });
    }
    Ok(true)
}

// ===========================================================================
// Tests
// ===========================================================================
