use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, TimeSeries, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// A single sleep period.
///
/// Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sleep {
    pub id: Option<String>,
    pub day: String,
    pub bedtime_start: DateTime<FixedOffset>,
    pub bedtime_end: DateTime<FixedOffset>,
    /// e.g. `long_sleep`, `late_nap`, `rest`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub period: Option<i32>,
    pub average_breath: Option<f64>,
    pub average_heart_rate: Option<f64>,
    pub average_hrv: Option<i32>,
    pub lowest_heart_rate: Option<i32>,
    pub awake_time: Option<i32>,
    pub deep_sleep_duration: Option<i32>,
    pub light_sleep_duration: Option<i32>,
    pub rem_sleep_duration: Option<i32>,
    pub total_sleep_duration: Option<i32>,
    pub time_in_bed: Option<i32>,
    pub efficiency: Option<i32>,
    pub latency: Option<i32>,
    pub restless_periods: Option<i32>,
    pub heart_rate: Option<TimeSeries>,
    pub hrv: Option<TimeSeries>,
    /// Movement per 30 seconds, one digit per slot.
    pub movement_30_sec: Option<String>,
    /// Sleep phase per 5 minutes: 1 deep, 2 light, 3 REM, 4 awake.
    pub sleep_phase_5_min: Option<String>,
    pub readiness_score_delta: Option<f64>,
    pub sleep_score_delta: Option<f64>,
    pub low_battery_alert: Option<bool>,
}

/// A page of [`Sleep`] periods.
pub type Sleeps = Page<Sleep>;

impl V2<'_> {
    /// Gets sleep periods for a range of dates.
    pub async fn sleep(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<Sleeps>>> {
        let path = parametise_date("v2/usercollection/sleep", start_date, end_date, next_token);
        self.client.get(ctx, &path).await
    }
}
