//! `v2/usercollection` endpoints.
//!
//! Collections are paginated. Each call returns one [`Page`]; when
//! [`Page::next_token`] is set, pass it back to the same method to fetch the
//! following page. Nothing is traversed automatically.

mod daily_activity;
mod daily_readiness;
mod daily_sleep;
mod heartrate;
mod personal_info;
mod session;
mod sleep;
mod tag;
mod workout;

pub use daily_activity::{ActivityContributors, DailyActivities, DailyActivity};
pub use daily_readiness::{DailyReadiness, DailyReadinesses, ReadinessContributors};
pub use daily_sleep::{DailySleep, DailySleeps, SleepContributors};
pub use heartrate::{Heartrate, Heartrates};
pub use personal_info::PersonalInfo;
pub use session::{Session, Sessions};
pub use sleep::{Sleep, Sleeps};
pub use tag::{Tag, Tags};
pub use workout::{Workout, Workouts};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::Client;

/// Handle on the v2 endpoints, obtained from [`Client::v2`].
///
/// # Example
///
/// ```no_run
/// # async fn example(client: oura_client::Client) -> oura_client::Result<()> {
/// let ctx = oura_client::Context::background();
/// let mut next_token = String::new();
/// loop {
///     let response = client
///         .v2()
///         .heartrate(&ctx, "2021-11-01T00:00:00+00:00", "", &next_token)
///         .await?;
///     let Some(page) = response.into_data() else { break };
///     for sample in &page.data {
///         println!("{} {}", sample.timestamp, sample.bpm);
///     }
///     match page.next_token {
///         Some(token) => next_token = token,
///         None => break,
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct V2<'a> {
    client: &'a Client,
}

impl<'a> V2<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

/// One page of a v2 collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Records on this page.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub data: Vec<T>,
    /// Continuation token for the next page; `None` on the last page.
    #[serde(default)]
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if another page can be requested.
    pub fn has_more(&self) -> bool {
        self.next_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Samples taken at a fixed interval.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimeSeries {
    /// Seconds between samples.
    pub interval: f64,
    /// Sample values; gaps are `None`.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub items: Vec<Option<f64>>,
    /// Local time of the first sample.
    pub timestamp: DateTime<FixedOffset>,
}
