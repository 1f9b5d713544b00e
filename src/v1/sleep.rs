use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::V1;
use crate::params::parametise_range;
use crate::{Context, Response, Result};

/// Summary of one sleep period.
///
/// Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sleep {
    pub summary_date: String,
    pub period_id: Option<i32>,
    /// `1` for the longest sleep period of the day.
    pub is_longest: Option<i32>,
    pub timezone: Option<i32>,
    pub bedtime_start: Option<DateTime<FixedOffset>>,
    pub bedtime_end: Option<DateTime<FixedOffset>>,
    pub bedtime_start_delta: Option<i32>,
    pub bedtime_end_delta: Option<i32>,
    pub midpoint_at_delta: Option<i32>,
    pub midpoint_time: Option<i32>,
    pub score: Option<i32>,
    pub score_total: Option<i32>,
    pub score_disturbances: Option<i32>,
    pub score_efficiency: Option<i32>,
    pub score_latency: Option<i32>,
    pub score_rem: Option<i32>,
    pub score_deep: Option<i32>,
    pub score_alignment: Option<i32>,
    pub total: Option<i32>,
    pub duration: Option<i32>,
    pub awake: Option<i32>,
    pub light: Option<i32>,
    pub rem: Option<i32>,
    pub deep: Option<i32>,
    pub onset_latency: Option<i32>,
    pub restless: Option<i32>,
    pub efficiency: Option<i32>,
    pub hr_lowest: Option<f64>,
    pub hr_average: Option<f64>,
    pub rmssd: Option<i32>,
    pub breath_average: Option<f64>,
    pub temperature_delta: Option<f64>,
    pub temperature_deviation: Option<f64>,
    pub temperature_trend_deviation: Option<f64>,
    /// Sleep stage per 5 minutes: 1 deep, 2 light, 3 REM, 4 awake.
    pub hypnogram_5min: Option<String>,
    pub hr_5min: Option<Vec<i32>>,
    pub rmssd_5min: Option<Vec<i32>>,
}

/// All sleep periods for the requested period.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Sleeps {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub sleep: Vec<Sleep>,
}

impl V1<'_> {
    /// Gets the sleep periods between `start` and `end`.
    pub async fn sleep(
        &self,
        ctx: &Context,
        start: &str,
        end: &str,
    ) -> Result<Response<Option<Sleeps>>> {
        let path = parametise_range("v1/sleep", start, end);
        self.client.get(ctx, &path).await
    }
}
