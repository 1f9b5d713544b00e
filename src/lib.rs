//! # oura-client - A typed client for the Oura ring API
//!
//! `oura-client` wraps the Oura REST API, both the legacy `v1` endpoints and
//! the paginated `v2/usercollection` endpoints, on top of `reqwest`. Every call
//! builds a request against the configured base URL, executes it once under a
//! caller-supplied [`Context`], and decodes the JSON body into typed records.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oura_client::{Client, Context};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), oura_client::Error> {
//!     let client = Client::builder()
//!         .access_token(std::env::var("OURA_ACCESS_TOKEN").unwrap_or_default())
//!         .user_agent("my-app/1.0")
//!         .build()?;
//!
//!     let ctx = Context::with_timeout(Duration::from_secs(30));
//!
//!     // v2: one page of daily activity, with an explicit continuation token
//!     let response = client
//!         .v2()
//!         .daily_activity(&ctx, "2021-11-01", "2021-11-07", "")
//!         .await?;
//!     if let Some(page) = &response.data {
//!         for day in &page.data {
//!             println!("{}: {:?} steps", day.day, day.steps);
//!         }
//!         if let Some(token) = &page.next_token {
//!             println!("more data available, next_token = {}", token);
//!         }
//!     }
//!
//!     // v1: user profile
//!     let user = client.v1().user_info(&ctx).await?;
//!     println!("User: {:?}", user.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed resources** - v1 and v2 records with optional fields modelled as `Option`
//! - **Deterministic URLs** - query parameters are sorted before encoding
//! - **Uniform errors** - auth failures, API messages and undecodable bodies are told apart
//! - **Cancellation** - every call honours a [`Context`] deadline or cancel signal
//! - **Injectable transport** - bring your own authenticated `reqwest::Client`
//! - **Logging** - request and response events through `tracing`
//!
//! ## Error Handling
//!
//! ```no_run
//! use oura_client::{Client, Context, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().access_token("TOKEN").build()?;
//! let ctx = Context::background();
//! match client.v2().tag(&ctx, "2021-10-01", "2021-01-01", "").await {
//!     Ok(response) => println!("Tags: {:?}", response.data),
//!     Err(Error::Auth { status, .. }) => eprintln!("Re-authenticate ({status})"),
//!     Err(Error::Api { status, messages }) => {
//!         eprintln!("Rejected with {status}: {}", messages.join("; "));
//!     }
//!     Err(Error::Decode { raw_response, .. }) => eprintln!("Unexpected body: {raw_response}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod context;
mod de;
mod error;
pub mod params;
mod response;
pub mod v1;
pub mod v2;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, LIBRARY_USER_AGENT};
pub use context::{CancelCause, Context};
pub use error::{Detail, Error, ErrorDetail, ErrorList, Result, ValidationIssue};
pub use response::{decode_response, Response};
