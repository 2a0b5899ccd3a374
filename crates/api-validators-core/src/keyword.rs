//! Keyword registry: binds each validation to a framework-style keyword name.
//!
//! Test runners address keywords by human names such as
//! `Validate Email Format` and pass positional arguments. [`Keyword`] resolves
//! those names and [`Keyword::run`] dispatches JSON arguments to the matching
//! function in [`crate::validation`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::AssertionError;
use crate::validation::{
    extract_ids_from_list, json_should_contain_nested_key, list_should_contain_item_with_field,
    validate_email_format, validate_iso_date_format, validate_response_time, validate_url_format,
    ResponseTiming, DEFAULT_ID_FIELD,
};

/// Keyword instances are shared for the whole run.
pub const LIBRARY_SCOPE: &str = "GLOBAL";

pub const LIBRARY_VERSION: &str = "1.0";

/// Failure to run a keyword.
///
/// Only [`KeywordError::Assertion`] means the checked value was wrong; the
/// other variants are caller mistakes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeywordError {
    #[error("No keyword with name '{0}' found")]
    UnknownKeyword(String),

    #[error("Keyword '{keyword}' expected {expected}, got {actual}")]
    Arity {
        keyword: &'static str,
        expected: String,
        actual: usize,
    },

    #[error("Keyword '{keyword}' argument '{argument}' {reason}")]
    InvalidArgument {
        keyword: &'static str,
        argument: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Assertion(#[from] AssertionError),
}

impl KeywordError {
    pub fn is_assertion(&self) -> bool {
        matches!(self, KeywordError::Assertion(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    ValidateEmailFormat,
    ValidateUrlFormat,
    JsonShouldContainNestedKey,
    ValidateResponseTime,
    ListShouldContainItemWithField,
    ExtractIdsFromList,
    ValidateIsoDateFormat,
}

/// Serializable description of a keyword, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordInfo {
    pub name: &'static str,
    pub summary: &'static str,
    pub arguments: &'static [&'static str],
}

impl Keyword {
    pub const ALL: [Keyword; 7] = [
        Keyword::ValidateEmailFormat,
        Keyword::ValidateUrlFormat,
        Keyword::JsonShouldContainNestedKey,
        Keyword::ValidateResponseTime,
        Keyword::ListShouldContainItemWithField,
        Keyword::ExtractIdsFromList,
        Keyword::ValidateIsoDateFormat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Keyword::ValidateEmailFormat => "Validate Email Format",
            Keyword::ValidateUrlFormat => "Validate URL Format",
            Keyword::JsonShouldContainNestedKey => "JSON Should Contain Nested Key",
            Keyword::ValidateResponseTime => "Validate Response Time",
            Keyword::ListShouldContainItemWithField => "List Should Contain Item With Field",
            Keyword::ExtractIdsFromList => "Extract IDs From List",
            Keyword::ValidateIsoDateFormat => "Validate ISO Date Format",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Keyword::ValidateEmailFormat => "Fails unless the value is a local-part@domain.tld address.",
            Keyword::ValidateUrlFormat => "Fails unless the value starts with http(s):// and a dotted host.",
            Keyword::JsonShouldContainNestedKey => "Returns the value at a dot-separated key path.",
            Keyword::ValidateResponseTime => "Fails if the response took longer than max_time_ms.",
            Keyword::ListShouldContainItemWithField => "Returns the first object whose field equals the value.",
            Keyword::ExtractIdsFromList => "Returns the field (default 'id') of every object in the list.",
            Keyword::ValidateIsoDateFormat => "Fails unless the value starts with YYYY-MM-DDTHH:MM:SS.",
        }
    }

    /// Positional parameter names, in call order.
    pub fn arguments(self) -> &'static [&'static str] {
        match self {
            Keyword::ValidateEmailFormat => &["email"],
            Keyword::ValidateUrlFormat => &["url"],
            Keyword::JsonShouldContainNestedKey => &["json_data", "key_path"],
            Keyword::ValidateResponseTime => &["response", "max_time_ms"],
            Keyword::ListShouldContainItemWithField => &["items", "field_name", "field_value"],
            Keyword::ExtractIdsFromList => &["items", "id_field"],
            Keyword::ValidateIsoDateFormat => &["date_string"],
        }
    }

    fn required_arguments(self) -> usize {
        match self {
            Keyword::ExtractIdsFromList => 1,
            other => other.arguments().len(),
        }
    }

    pub fn info(self) -> KeywordInfo {
        KeywordInfo {
            name: self.name(),
            summary: self.summary(),
            arguments: self.arguments(),
        }
    }

    /// Run the keyword with positional JSON arguments.
    ///
    /// Checks return `true`; lookups return a clone of the resolved value.
    /// `Extract IDs From List` returns an array with `null` for objects that
    /// lack the field.
    pub fn run(self, args: &[Value]) -> Result<Value, KeywordError> {
        self.check_arity(args.len())?;

        let value = match self {
            Keyword::ValidateEmailFormat => {
                Value::Bool(validate_email_format(self.str_arg(args, 0)?)?)
            }
            Keyword::ValidateUrlFormat => Value::Bool(validate_url_format(self.str_arg(args, 0)?)?),
            Keyword::JsonShouldContainNestedKey => {
                json_should_contain_nested_key(&args[0], self.str_arg(args, 1)?)?.clone()
            }
            Keyword::ValidateResponseTime => {
                let response = self.timing_arg(args, 0)?;
                let max_time_ms = self.u64_arg(args, 1)?;
                Value::Bool(validate_response_time(&response, max_time_ms)?)
            }
            Keyword::ListShouldContainItemWithField => {
                let items = self.list_arg(args, 0)?;
                let field_name = self.str_arg(args, 1)?;
                list_should_contain_item_with_field(items, field_name, &args[2])?.clone()
            }
            Keyword::ExtractIdsFromList => {
                let items = self.list_arg(args, 0)?;
                let field_name = match args.get(1) {
                    Some(_) => self.str_arg(args, 1)?,
                    None => DEFAULT_ID_FIELD,
                };
                Value::Array(
                    extract_ids_from_list(items, field_name)
                        .into_iter()
                        .map(|v| v.cloned().unwrap_or(Value::Null))
                        .collect(),
                )
            }
            Keyword::ValidateIsoDateFormat => {
                Value::Bool(validate_iso_date_format(self.str_arg(args, 0)?)?)
            }
        };

        tracing::debug!(keyword = self.name(), "keyword passed");
        Ok(value)
    }

    fn check_arity(self, actual: usize) -> Result<(), KeywordError> {
        let min = self.required_arguments();
        let max = self.arguments().len();
        if (min..=max).contains(&actual) {
            return Ok(());
        }
        let expected = match (min, max) {
            (1, 1) => "1 argument".to_string(),
            (min, max) if min == max => format!("{min} arguments"),
            (min, max) => format!("{min} to {max} arguments"),
        };
        Err(KeywordError::Arity {
            keyword: self.name(),
            expected,
            actual,
        })
    }

    fn invalid(self, index: usize, reason: impl Into<String>) -> KeywordError {
        KeywordError::InvalidArgument {
            keyword: self.name(),
            argument: self.arguments()[index],
            reason: reason.into(),
        }
    }

    fn str_arg(self, args: &[Value], index: usize) -> Result<&str, KeywordError> {
        args[index]
            .as_str()
            .ok_or_else(|| self.invalid(index, "must be a string"))
    }

    fn list_arg(self, args: &[Value], index: usize) -> Result<&[Value], KeywordError> {
        args[index]
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.invalid(index, "must be a list"))
    }

    fn u64_arg(self, args: &[Value], index: usize) -> Result<u64, KeywordError> {
        args[index]
            .as_u64()
            .ok_or_else(|| self.invalid(index, "must be a non-negative integer"))
    }

    /// Accepts either bare seconds or `{"elapsed": <seconds>}`.
    fn timing_arg(self, args: &[Value], index: usize) -> Result<ResponseTiming, KeywordError> {
        match &args[index] {
            Value::Number(n) => n
                .as_f64()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .map(ResponseTiming::new)
                .ok_or_else(|| self.invalid(index, "must be a non-negative number of seconds")),
            value @ Value::Object(_) => ResponseTiming::deserialize(value).map_err(|e| {
                self.invalid(index, format!("must carry a numeric 'elapsed' in seconds: {e}"))
            }),
            _ => Err(self.invalid(
                index,
                "must be seconds or an object with an 'elapsed' field",
            )),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case, spaces and underscores are ignored, so `validate_email_format`
/// and `Validate Email Format` name the same keyword.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Keyword {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Keyword::ALL
            .into_iter()
            .find(|k| normalize(k.name()) == wanted)
            .ok_or_else(|| KeywordError::UnknownKeyword(s.to_string()))
    }
}
