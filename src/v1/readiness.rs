use serde::{Deserialize, Serialize};

use super::V1;
use crate::params::parametise_range;
use crate::{Context, Response, Result};

/// Readiness summary for one sleep period.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Readiness {
    pub summary_date: String,
    pub period_id: Option<i32>,
    pub score: Option<i32>,
    pub score_previous_night: Option<i32>,
    pub score_sleep_balance: Option<i32>,
    pub score_previous_day: Option<i32>,
    pub score_activity_balance: Option<i32>,
    pub score_resting_hr: Option<i32>,
    pub score_hrv_balance: Option<i32>,
    pub score_recovery_index: Option<i32>,
    pub score_temperature: Option<i32>,
    pub rest_mode_state: Option<i32>,
}

/// All readiness summaries for the requested period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReadinessSummaries {
    #[serde(rename = "readiness", default, deserialize_with = "crate::de::null_as_default")]
    pub readiness_summaries: Vec<Readiness>,
}

impl V1<'_> {
    /// Gets the readiness summaries between `start` and `end`.
    pub async fn readiness(
        &self,
        ctx: &Context,
        start: &str,
        end: &str,
    ) -> Result<Response<Option<ReadinessSummaries>>> {
        let path = parametise_range("v1/readiness", start, end);
        self.client.get(ctx, &path).await
    }
}
