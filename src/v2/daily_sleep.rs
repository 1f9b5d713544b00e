use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// Sleep score for a single day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailySleep {
    pub id: Option<String>,
    pub day: String,
    pub timestamp: DateTime<FixedOffset>,
    pub score: Option<i32>,
    pub contributors: Option<SleepContributors>,
}

/// Contributors to the sleep score, each in `[1, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SleepContributors {
    pub deep_sleep: Option<i32>,
    pub efficiency: Option<i32>,
    pub latency: Option<i32>,
    pub rem_sleep: Option<i32>,
    pub restfulness: Option<i32>,
    pub timing: Option<i32>,
    pub total_sleep: Option<i32>,
}

/// A page of [`DailySleep`] records.
pub type DailySleeps = Page<DailySleep>;

impl V2<'_> {
    /// Gets daily sleep scores for a range of dates.
    pub async fn daily_sleep(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<DailySleeps>>> {
        let path = parametise_date(
            "v2/usercollection/daily_sleep",
            start_date,
            end_date,
            next_token,
        );
        self.client.get(ctx, &path).await
    }
}
