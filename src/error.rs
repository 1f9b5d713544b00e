//! Error types for Oura API calls.
//!
//! Every failure is returned to the caller. Where a response was received, the
//! error keeps the HTTP status and, for decode failures, the raw body so that
//! unexpected payloads can be inspected.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::context::CancelCause;

/// The main error type for Oura API calls.
///
/// # Examples
///
/// ```no_run
/// use oura_client::{Client, Context, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder().access_token("TOKEN").build()?;
/// let ctx = Context::background();
///
/// match client.v2().daily_sleep(&ctx, "2021-10-01", "2021-01-01", "").await {
///     Ok(response) => println!("{:?}", response.data),
///     Err(Error::Auth { status, .. }) => eprintln!("token rejected ({status})"),
///     Err(Error::Api { messages, .. }) => eprintln!("API said: {}", messages.join(", ")),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration is unusable, e.g. a base URL without a
    /// trailing slash.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The resource path could not be resolved against the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The caller's context was cancelled or its deadline passed before the
    /// call completed.
    #[error("Request cancelled: {0}")]
    Cancelled(CancelCause),

    /// The transport failed (connection refused, DNS, TLS, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API rejected the access token (401 or 403).
    ///
    /// This is never temporary: repeating the call with the same credentials
    /// will fail the same way.
    #[error("Authentication failed ({status}): {message}")]
    Auth {
        /// The HTTP status code
        status: StatusCode,
        /// Status text of the response
        message: String,
    },

    /// The API returned a structured error.
    #[error("{}: {}", status_text(.status), .messages.join(","))]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// Human-readable messages extracted from the error body
        messages: Vec<String>,
    },

    /// The response body could not be interpreted as the expected resource or
    /// as any known error shape.
    #[error("Failed to decode response ({}): {source}", status_text(.status))]
    Decode {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
        /// The underlying parse failure
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns `true` if repeating the call later could succeed.
    ///
    /// Authentication failures, bad configuration and undecodable payloads are
    /// permanent. Network failures, cancellation and 5xx API errors are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use oura_client::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Auth {
    ///     status: StatusCode::FORBIDDEN,
    ///     message: "Forbidden".to_string(),
    /// };
    /// assert!(!err.is_temporary());
    ///
    /// let err = Error::Api {
    ///     status: StatusCode::BAD_GATEWAY,
    ///     messages: vec!["upstream unavailable".to_string()],
    /// };
    /// assert!(err.is_temporary());
    /// ```
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Cancelled(_) => true,
            Error::Api { status, .. } => status.is_server_error(),
            Error::Auth { .. } => false,
            Error::Decode { .. } => false,
            Error::Configuration(_) => false,
            Error::Serialization(_) => false,
            Error::InvalidUrl(_) => false,
        }
    }

    /// Returns the HTTP status code if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Auth { status, .. } => Some(*status),
            Error::Api { status, .. } => Some(*status),
            Error::Decode { status, .. } => Some(*status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body for decode failures.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the messages carried by an [`Error::Api`].
    pub fn messages(&self) -> &[String] {
        match self {
            Error::Api { messages, .. } => messages,
            _ => &[],
        }
    }
}

/// A specialized `Result` type for Oura API calls.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn status_text(status: &StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

/// Error body made of a bare list of messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ErrorList(pub Vec<String>);

/// Error body carrying a single detail entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorDetail {
    /// HTTP status echoed by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Short summary of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// What went wrong
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub detail: Detail,
}

/// The `detail` member of an [`ErrorDetail`].
///
/// The v1 API sends a sentence, the v2 API sends a list of validation issues
/// for malformed query parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Detail {
    /// A single message
    Message(String),
    /// Request validation failures
    Validation(Vec<ValidationIssue>),
}

impl Default for Detail {
    fn default() -> Self {
        Detail::Message(String::new())
    }
}

/// One failed check in a validation error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidationIssue {
    /// Location of the offending value, e.g. `["query", "start_date"]`
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub loc: Vec<serde_json::Value>,
    /// Description of the failure
    pub msg: String,
    /// Machine-readable failure kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorDetail {
    /// Flattens the detail into human-readable messages.
    ///
    /// Falls back to the title when the detail is empty. Returns an empty list
    /// when the body carried no usable text at all.
    pub fn messages(&self) -> Vec<String> {
        let messages: Vec<String> = match &self.detail {
            Detail::Message(m) if m.is_empty() => Vec::new(),
            Detail::Message(m) => vec![m.clone()],
            Detail::Validation(issues) => issues.iter().map(|i| i.msg.clone()).collect(),
        };
        if messages.is_empty() {
            return self.title.iter().filter(|t| !t.is_empty()).cloned().collect();
        }
        messages
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_joins_messages() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "Bad Request: first,second");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_temporary());
    }

    #[test]
    fn test_detail_message() {
        let body = r#"{"status": 400, "title": "Bad", "detail": "Start date is greater than end date"}"#;
        let detail: ErrorDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.status, Some(400));
        assert_eq!(detail.messages(), vec!["Start date is greater than end date"]);
    }

    #[test]
    fn test_detail_validation_issues() {
        let detail: ErrorDetail = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["query", "start_date"], "msg": "invalid date format", "type": "value_error.date"},
                {"loc": ["query", "end_date"], "msg": "invalid date format"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            detail.messages(),
            vec!["invalid date format", "invalid date format"]
        );
        match &detail.detail {
            Detail::Validation(issues) => {
                assert_eq!(issues[0].kind.as_deref(), Some("value_error.date"));
                assert_eq!(issues[1].kind, None);
            }
            other => panic!("Expected validation issues, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_falls_back_to_title() {
        let detail: ErrorDetail = serde_json::from_str(r#"{"title": "Not Found"}"#).unwrap();
        assert_eq!(detail.messages(), vec!["Not Found"]);

        let detail: ErrorDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.messages().is_empty());
    }

    #[test]
    fn test_cancelled_is_temporary() {
        assert!(Error::Cancelled(CancelCause::DeadlineExceeded).is_temporary());
        assert_eq!(Error::Cancelled(CancelCause::Cancelled).status(), None);
    }
}
