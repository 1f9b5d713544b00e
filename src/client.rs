//! Oura API client.
//!
//! The [`Client`] type builds requests against the configured base URL,
//! executes them through the injected `reqwest` transport and decodes the
//! result. Use [`ClientBuilder`] to configure and create clients.

use crate::{
    context::Context,
    response::decode_response,
    v1::V1,
    v2::V2,
    Error, Response, Result,
};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Production API host. Resource paths are resolved against it.
pub const DEFAULT_BASE_URL: &str = "https://api.ouraring.com/";

/// Library identifier sent in the `User-Agent` header.
pub const LIBRARY_USER_AGENT: &str = concat!("oura-client/", env!("CARGO_PKG_VERSION"));

/// A client for the Oura API.
///
/// The client is cheap to clone and safe to share between tasks; its
/// configuration never changes after [`ClientBuilder::build`].
///
/// # Examples
///
/// ```no_run
/// use oura_client::{Client, Context};
///
/// # async fn example() -> Result<(), oura_client::Error> {
/// let client = Client::builder()
///     .access_token("TOKEN")
///     .user_agent("sleep-dashboard/2.1")
///     .build()?;
///
/// let ctx = Context::background();
/// let page = client
///     .v2()
///     .daily_sleep(&ctx, "2021-11-01", "2021-11-07", "")
///     .await?;
///
/// if let Some(page) = page.into_data() {
///     for day in &page.data {
///         println!("{}: {:?}", day.day, day.score);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    user_agent: String,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL resource paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The `User-Agent` header value sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Resources served under the legacy `v1/` prefix.
    pub fn v1(&self) -> V1<'_> {
        V1::new(self)
    }

    /// Resources served under the `v2/usercollection/` prefix.
    pub fn v2(&self) -> V2<'_> {
        V2::new(self)
    }

    /// Builds a request for `path`, relative to the base URL.
    ///
    /// A relative path should be given without a leading slash. If `body` is
    /// provided it is encoded as JSON and sent with a JSON content type.
    ///
    /// # Errors
    ///
    /// * [`Error::Configuration`] if the base URL path lacks a trailing slash.
    /// * [`Error::Serialization`] if the body cannot be encoded.
    /// * [`Error::InvalidUrl`] if `path` cannot be resolved against the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use oura_client::Client;
    /// use http::Method;
    ///
    /// # fn example() -> Result<(), oura_client::Error> {
    /// let client = Client::builder().build()?;
    /// let request = client.new_request::<()>(Method::GET, "v1/userinfo", None)?;
    ///
    /// assert_eq!(request.url().as_str(), "https://api.ouraring.com/v1/userinfo");
    /// assert_eq!(request.headers()["accept"], "application/json");
    /// assert!(request.headers().get("content-type").is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let base_url = &self.inner.base_url;
        if !base_url.path().ends_with('/') {
            return Err(Error::Configuration(format!(
                "base URL does not have a trailing slash: {:?}",
                base_url.as_str()
            )));
        }

        let url = base_url.join(path)?;

        let mut request = reqwest::Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.inner.user_agent.is_empty() {
            let user_agent = HeaderValue::from_str(&self.inner.user_agent)
                .map_err(|e| Error::Configuration(format!("Invalid user agent: {}", e)))?;
            headers.insert(USER_AGENT, user_agent);
        }

        if let Some(body) = body {
            let json = serde_json::to_vec(body).map_err(Error::Serialization)?;
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(json.into());
        }

        Ok(request)
    }

    /// Sends `request` and decodes the response into `T`.
    ///
    /// The whole body is read before any decoding decision. The returned data
    /// is `None` when the API answered 2xx with an empty body.
    ///
    /// # Errors
    ///
    /// * [`Error::Cancelled`] if `ctx` is already stopped, or stops before the
    ///   body has been read. No response is produced in that case.
    /// * [`Error::Network`] if the transport fails.
    /// * Any error produced by [`decode_response`](crate::response::decode_response).
    pub async fn execute<T>(
        &self,
        ctx: &Context,
        request: reqwest::Request,
    ) -> Result<Response<Option<T>>>
    where
        T: DeserializeOwned,
    {
        if let Some(cause) = ctx.err() {
            return Err(Error::Cancelled(cause));
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Executing HTTP request"
        );

        let start_time = Instant::now();
        let exchange = async {
            let response = self.inner.http_client.execute(request).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, Error>((status, headers, body))
        };

        let (status, headers, body) = tokio::select! {
            biased;
            cause = ctx.done() => return Err(Error::Cancelled(cause)),
            result = exchange => result?,
        };
        let latency = start_time.elapsed();

        tracing::debug!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            bytes = body.len(),
            "Received HTTP response"
        );

        let data = decode_response(status, &body)?;
        let raw_body = String::from_utf8_lossy(&body).into_owned();
        Ok(Response::new(data, raw_body, status, headers, latency))
    }

    /// Builds and executes a body-less GET for `path`.
    pub(crate) async fn get<T>(&self, ctx: &Context, path: &str) -> Result<Response<Option<T>>>
    where
        T: DeserializeOwned,
    {
        let request = self.new_request::<()>(Method::GET, path, None)?;
        self.execute(ctx, request).await
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use oura_client::ClientBuilder;
///
/// # fn example() -> Result<(), oura_client::Error> {
/// let http_client = reqwest::Client::builder()
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let client = ClientBuilder::new()
///     .base_url("https://api.ouraring.com/")?
///     .http_client(http_client)
///     .user_agent("my-app/1.0")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    access_token: Option<String>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            http_client: None,
            access_token: None,
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// The path must end with `/`; this is checked by [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Names the calling application in the `User-Agent` header.
    ///
    /// The library identifier is appended, e.g. `my-app/1.0 oura-client/0.1.0`.
    pub fn user_agent(mut self, application: impl Into<String>) -> Self {
        self.user_agent = Some(application.into());
        self
    }

    /// Uses `client` as the transport.
    ///
    /// The client is expected to authenticate requests itself, for example
    /// through a default `Authorization` header.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Authenticates every request with a static bearer token.
    ///
    /// Ignored when a transport is injected with [`http_client`](Self::http_client).
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL path lacks a trailing
    /// slash, the user agent is not a valid header value, or the transport
    /// cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            return Err(Error::Configuration(format!(
                "base URL does not have a trailing slash: {:?}",
                base_url.as_str()
            )));
        }

        let user_agent = match self.user_agent {
            Some(application) if !application.is_empty() => {
                format!("{} {}", application, LIBRARY_USER_AGENT)
            }
            _ => LIBRARY_USER_AGENT.to_string(),
        };
        HeaderValue::from_str(&user_agent)
            .map_err(|e| Error::Configuration(format!("Invalid user agent: {}", e)))?;

        let http_client = match (self.http_client, self.access_token) {
            (Some(client), _) => client,
            (None, token) => build_http_client(token.as_deref())?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                user_agent,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_http_client(access_token: Option<&str>) -> Result<reqwest::Client> {
    let mut default_headers = HeaderMap::new();
    if let Some(token) = access_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Configuration(format!("Invalid access token: {}", e)))?;
        value.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, value);
    }

    reqwest::Client::builder()
        .default_headers(default_headers)
        .build()
        .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn client() -> Client {
        Client::builder().build().unwrap()
    }

    #[derive(Serialize)]
    struct UserInfo {
        age: u32,
        weight: u32,
        gender: &'static str,
        email: &'static str,
    }

    #[test]
    fn test_defaults() {
        let c = client();
        assert_eq!(c.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(c.user_agent(), LIBRARY_USER_AGENT);
    }

    #[test]
    fn test_user_agent_combines_application_and_library() {
        let c = Client::builder().user_agent("my-app/1.0").build().unwrap();
        assert_eq!(c.user_agent(), format!("my-app/1.0 {}", LIBRARY_USER_AGENT));
    }

    #[test]
    fn test_new_request_with_body() {
        let c = client();
        let body = UserInfo {
            age: 99,
            weight: 102,
            gender: "ano",
            email: "user@example.com",
        };

        let req = c.new_request(Method::GET, "foo", Some(&body)).unwrap();

        assert_eq!(req.url().as_str(), format!("{}foo", DEFAULT_BASE_URL));
        let sent = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(sent).unwrap(),
            r#"{"age":99,"weight":102,"gender":"ano","email":"user@example.com"}"#
        );
        assert_eq!(req.headers()[USER_AGENT], c.user_agent());
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_new_request_does_not_escape_html() {
        let c = client();
        let req = c
            .new_request(Method::POST, "tags", Some(&serde_json::json!({"text": "<b>&</b>"})))
            .unwrap();
        let sent = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(std::str::from_utf8(sent).unwrap(), r#"{"text":"<b>&</b>"}"#);
    }

    #[test]
    fn test_new_request_with_unserializable_body() {
        let c = client();
        let mut body = HashMap::new();
        body.insert(vec![1u8, 2], "value");
        let err = c.new_request(Method::GET, ".", Some(&body)).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)), "got {:?}", err);
    }

    #[test]
    fn test_new_request_with_invalid_url() {
        let c = client();
        let err = c.new_request::<()>(Method::GET, "http://[::1", None).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)), "got {:?}", err);
    }

    #[test]
    fn test_new_request_without_body() {
        let c = client();
        let req = c.new_request::<()>(Method::GET, ".", None).unwrap();
        assert!(req.body().is_none());
        assert!(req.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_new_request_checks_base_url_each_call() {
        let c = Client {
            inner: Arc::new(ClientInner {
                http_client: reqwest::Client::new(),
                base_url: Url::parse("https://api.ouraring.com/v2").unwrap(),
                user_agent: String::new(),
            }),
        };
        let err = c.new_request::<()>(Method::GET, "usercollection/tag", None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "got {:?}", err);
    }

    #[test]
    fn test_empty_user_agent_is_not_sent() {
        let c = Client {
            inner: Arc::new(ClientInner {
                http_client: reqwest::Client::new(),
                base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
                user_agent: String::new(),
            }),
        };
        let req = c.new_request::<()>(Method::GET, "v1/userinfo", None).unwrap();
        assert!(req.headers().get(USER_AGENT).is_none());
    }

    #[test]
    fn test_build_rejects_base_url_without_trailing_slash() {
        let result = Client::builder()
            .base_url("https://api.ouraring.com/v2")
            .unwrap()
            .build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_build_rejects_invalid_access_token() {
        let result = Client::builder().access_token("bad\ntoken").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
