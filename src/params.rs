//! Query string construction for resource paths.
//!
//! Keys are kept sorted so that the same set of parameters always produces the
//! same URL, whatever order they were added in.

use std::collections::BTreeMap;

/// Naming scheme for the range bounds of a v2 collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `start_date` / `end_date`, calendar dates such as `2021-11-01`.
    Date,
    /// `start_datetime` / `end_datetime`, full ISO 8601 timestamps.
    Datetime,
}

impl Convention {
    fn keys(self) -> (&'static str, &'static str) {
        match self {
            Convention::Date => ("start_date", "end_date"),
            Convention::Datetime => ("start_datetime", "end_datetime"),
        }
    }
}

/// Query parameters for a single request.
///
/// Empty values are dropped on insert. Encoding sorts keys ascending and
/// applies `application/x-www-form-urlencoded` escaping to values.
///
/// # Examples
///
/// ```
/// use oura_client::params::QueryParams;
///
/// let query = QueryParams::new()
///     .with("start", "2020-01-20")
///     .with("end", "2020-01-22")
///     .with("next_token", "");
///
/// assert_eq!(query.encode(), "end=2020-01-22&start=2020-01-20");
/// assert_eq!(query.apply("v1/sleep"), "v1/sleep?end=2020-01-22&start=2020-01-20");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: BTreeMap<String, String>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value` unless `value` is empty.
    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.pairs.insert(key.into(), value.to_string());
        }
        self
    }

    /// Returns `true` if no parameter survived.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the parameters, keys in ascending order.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    /// Appends the encoded query to `path`, leaving it untouched when empty.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }
        format!("{}?{}", path, self.encode())
    }
}

/// Builds a v1 path with plain `start` / `end` bounds.
pub fn parametise_range(path: &str, start: &str, end: &str) -> String {
    QueryParams::new()
        .with("start", start)
        .with("end", end)
        .apply(path)
}

/// Builds a v2 path with range bounds named after `convention` and an
/// optional continuation token.
///
/// Values are passed through verbatim; the API validates them.
pub fn parametise(
    path: &str,
    convention: Convention,
    start: &str,
    end: &str,
    next_token: &str,
) -> String {
    let (start_key, end_key) = convention.keys();
    QueryParams::new()
        .with(start_key, start)
        .with(end_key, end)
        .with("next_token", next_token)
        .apply(path)
}

/// [`parametise`] with the date convention.
pub fn parametise_date(path: &str, start: &str, end: &str, next_token: &str) -> String {
    parametise(path, Convention::Date, start, end, next_token)
}

/// [`parametise`] with the datetime convention.
pub fn parametise_datetime(path: &str, start: &str, end: &str, next_token: &str) -> String {
    parametise(path, Convention::Datetime, start, end, next_token)
}
