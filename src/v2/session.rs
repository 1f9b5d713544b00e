use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, TimeSeries, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// A guided or unguided session recorded in the app.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub id: Option<String>,
    pub day: String,
    pub start_datetime: DateTime<FixedOffset>,
    pub end_datetime: DateTime<FixedOffset>,
    /// e.g. `breathing`, `meditation`, `nap`, `relaxation`, `rest`, `body_status`.
    #[serde(rename = "type")]
    pub kind: String,
    pub mood: Option<String>,
    pub heart_rate: Option<TimeSeries>,
    pub heart_rate_variability: Option<TimeSeries>,
    pub motion_count: Option<TimeSeries>,
}

/// A page of [`Session`] records.
pub type Sessions = Page<Session>;

impl V2<'_> {
    /// Gets sessions for a range of dates.
    pub async fn session(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<Sessions>>> {
        let path = parametise_date("v2/usercollection/session", start_date, end_date, next_token);
        self.client.get(ctx, &path).await
    }
}
