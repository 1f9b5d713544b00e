use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, V2};
use crate::params::parametise_datetime;
use crate::{Context, Response, Result};

/// A single heart rate measurement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Heartrate {
    pub bpm: i32,
    /// e.g. `awake`, `rest`, `sleep`, `session`, `workout`.
    pub source: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// A page of [`Heartrate`] samples.
pub type Heartrates = Page<Heartrate>;

impl V2<'_> {
    /// Gets heart rate samples for a range of timestamps.
    ///
    /// Bounds are ISO 8601 datetimes such as `2021-11-01T00:00:00+00:00`.
    /// Empty bounds fall back to the API defaults: `end_datetime` is now and
    /// `start_datetime` one day earlier.
    pub async fn heartrate(
        &self,
        ctx: &Context,
        start_datetime: &str,
        end_datetime: &str,
        next_token: &str,
    ) -> Result<Response<Option<Heartrates>>> {
        let path = parametise_datetime(
            "v2/usercollection/heartrate",
            start_datetime,
            end_datetime,
            next_token,
        );
        self.client.get(ctx, &path).await
    }
}
