//! Response envelope and body decoding.
//!
//! The [`Response`] type wraps the decoded resource together with the HTTP
//! details of the exchange. [`decode_response`] turns a status code and raw
//! body into either a resource or a classified [`Error`].

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{status_text, ErrorDetail, ErrorList};
use crate::{Error, Result};

/// A successful response from the Oura API.
///
/// # Type Parameters
///
/// * `T` - The decoded payload. Resource methods return `Response<Option<R>>`,
///   where `None` means the API answered with an empty body.
///
/// # Examples
///
/// ```no_run
/// use oura_client::{Client, Context};
///
/// # async fn example() -> Result<(), oura_client::Error> {
/// let client = Client::builder().access_token("TOKEN").build()?;
/// let response = client.v2().personal_info(&Context::background()).await?;
///
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// if let Some(info) = &response.data {
///     println!("Age: {:?}", info.age);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request to reading the full body.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type using the provided function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oura_client::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     Some(42),
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let doubled = response.map(|n| n.map(|n| n * 2));
    /// assert_eq!(doubled.data, Some(84));
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oura_client::Response;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new((), String::new(), StatusCode::OK, headers, Duration::ZERO);
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> Response<Option<T>> {
    /// Takes the decoded payload, dropping the envelope.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Decodes a fully read response body.
///
/// * 2xx with an empty body yields `Ok(None)`.
/// * 2xx with a body yields the decoded resource, or [`Error::Decode`].
/// * 401 and 403 yield [`Error::Auth`] without looking at the body.
/// * Any other status goes through the error shapes in order: a list of
///   messages first, then a single detail object. The first shape that parses
///   produces an [`Error::Api`]; if none does, [`Error::Decode`].
///
/// A non-2xx body is never decoded into `T`.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<Option<T>> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(None);
        }
        return serde_json::from_slice(body)
            .map(Some)
            .map_err(|source| decode_error(status, body, source));
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Auth {
            status,
            message: status_text(&status).to_string(),
        });
    }

    match classify_error_body(body) {
        Ok(messages) => Err(Error::Api { status, messages }),
        Err(source) => Err(decode_error(status, body, source)),
    }
}

const NO_ERROR_INFORMATION: &str = "no additional error information";

fn classify_error_body(body: &[u8]) -> serde_json::Result<Vec<String>> {
    if let Ok(ErrorList(messages)) = serde_json::from_slice::<ErrorList>(body) {
        if !messages.is_empty() {
            return Ok(messages);
        }
    }

    let detail: ErrorDetail = serde_json::from_slice(body)?;
    let messages = detail.messages();
    if messages.is_empty() {
        return Ok(vec![NO_ERROR_INFORMATION.to_string()]);
    }
    Ok(messages)
}

fn decode_error(status: StatusCode, body: &[u8], source: serde_json::Error) -> Error {
    Error::Decode {
        status,
        raw_response: String::from_utf8_lossy(body).into_owned(),
        source,
    }
}
