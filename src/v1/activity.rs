use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::V1;
use crate::params::parametise_range;
use crate::{Context, Response, Result};

/// Activity summary for one day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    /// Day the summary belongs to, `YYYY-MM-DD`.
    pub summary_date: String,
    pub day_start: Option<DateTime<FixedOffset>>,
    pub day_end: Option<DateTime<FixedOffset>>,
    /// Offset from UTC in minutes.
    pub timezone: Option<i32>,
    pub score: Option<i32>,
    pub score_stay_active: Option<i32>,
    pub score_move_every_hour: Option<i32>,
    pub score_meet_daily_targets: Option<i32>,
    pub score_training_frequency: Option<i32>,
    pub score_training_volume: Option<i32>,
    pub score_recovery_time: Option<i32>,
    pub daily_movement: Option<i32>,
    pub non_wear: Option<i32>,
    pub rest: Option<i32>,
    pub inactive: Option<i32>,
    pub inactivity_alerts: Option<i32>,
    pub low: Option<i32>,
    pub medium: Option<i32>,
    pub high: Option<i32>,
    pub steps: Option<i32>,
    pub cal_total: Option<i32>,
    pub cal_active: Option<i32>,
    pub met_min_inactive: Option<i32>,
    pub met_min_low: Option<i32>,
    pub met_min_medium: Option<i32>,
    pub met_min_medium_plus: Option<i32>,
    pub met_min_high: Option<i32>,
    pub average_met: Option<f64>,
    /// Activity class per 5 minutes, one digit per slot.
    pub class_5min: Option<String>,
    /// MET level per minute.
    pub met_1min: Option<Vec<f64>>,
    pub rest_mode_state: Option<i32>,
    pub target_calories: Option<i32>,
    pub target_km: Option<f64>,
    pub target_miles: Option<f64>,
    pub to_target_km: Option<f64>,
    pub to_target_miles: Option<f64>,
    pub total: Option<i32>,
}

/// All activity summaries for the requested period.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Activities {
    #[serde(rename = "activity", default, deserialize_with = "crate::de::null_as_default")]
    pub activities: Vec<Activity>,
}

impl V1<'_> {
    /// Gets the activity summaries between `start` and `end` (inclusive).
    pub async fn activity(
        &self,
        ctx: &Context,
        start: &str,
        end: &str,
    ) -> Result<Response<Option<Activities>>> {
        let path = parametise_range("v1/activity", start, end);
        self.client.get(ctx, &path).await
    }
}
