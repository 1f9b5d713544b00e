use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, TimeSeries, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// Activity summary and detailed activity levels for one day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailyActivity {
    pub id: Option<String>,
    pub day: String,
    pub timestamp: DateTime<FixedOffset>,
    pub score: Option<i32>,
    /// Activity class per 5 minutes, one digit per slot.
    pub class_5_min: Option<String>,
    pub active_calories: Option<i32>,
    pub total_calories: Option<i32>,
    pub target_calories: Option<i32>,
    pub average_met_minutes: Option<f64>,
    pub contributors: Option<ActivityContributors>,
    /// Meters.
    pub equivalent_walking_distance: Option<i32>,
    pub high_activity_met_minutes: Option<i32>,
    pub high_activity_time: Option<i32>,
    pub medium_activity_met_minutes: Option<i32>,
    pub medium_activity_time: Option<i32>,
    pub low_activity_met_minutes: Option<i32>,
    pub low_activity_time: Option<i32>,
    pub sedentary_met_minutes: Option<i32>,
    pub sedentary_time: Option<i32>,
    pub resting_time: Option<i32>,
    pub non_wear_time: Option<i32>,
    pub inactivity_alerts: Option<i32>,
    pub met: Option<TimeSeries>,
    pub meters_to_target: Option<i32>,
    pub target_meters: Option<i32>,
    pub steps: Option<i32>,
}

/// Contributors to the activity score, each in `[1, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityContributors {
    pub meet_daily_targets: Option<i32>,
    pub move_every_hour: Option<i32>,
    pub recovery_time: Option<i32>,
    pub stay_active: Option<i32>,
    pub training_frequency: Option<i32>,
    pub training_volume: Option<i32>,
}

/// A page of [`DailyActivity`] records.
pub type DailyActivities = Page<DailyActivity>;

impl V2<'_> {
    /// Gets daily activity summaries for a range of dates.
    ///
    /// Empty bounds fall back to the API defaults: `end_date` is the current
    /// UTC date and `start_date` the day before it.
    pub async fn daily_activity(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<DailyActivities>>> {
        let path = parametise_date(
            "v2/usercollection/daily_activity",
            start_date,
            end_date,
            next_token,
        );
        self.client.get(ctx, &path).await
    }
}
