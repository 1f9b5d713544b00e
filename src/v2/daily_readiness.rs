use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// Readiness for a single day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailyReadiness {
    pub id: Option<String>,
    pub day: String,
    pub timestamp: DateTime<FixedOffset>,
    pub score: Option<i32>,
    pub contributors: Option<ReadinessContributors>,
    /// Degrees Celsius.
    pub temperature_deviation: Option<f64>,
    pub temperature_trend_deviation: Option<f64>,
}

/// Contributors to the readiness score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReadinessContributors {
    /// Contribution of cumulative activity balance in range `[1, 100]`.
    pub activity_balance: Option<i32>,
    /// Contribution of body temperature in range `[1, 100]`.
    pub body_temperature: Option<i32>,
    /// Contribution of heart rate variability balance in range `[1, 100]`.
    pub hrv_balance: Option<i32>,
    /// Contribution of previous day's activity in range `[1, 100]`.
    pub previous_day_activity: Option<i32>,
    /// Contribution of previous night's sleep in range `[1, 100]`.
    pub previous_night: Option<i32>,
    /// Contribution of recovery index in range `[1, 100]`.
    pub recovery_index: Option<i32>,
    /// Contribution of resting heart rate in range `[1, 100]`.
    pub resting_heart_rate: Option<i32>,
    /// Contribution of sleep balance in range `[1, 100]`.
    pub sleep_balance: Option<i32>,
}

/// A page of [`DailyReadiness`] records.
pub type DailyReadinesses = Page<DailyReadiness>;

impl V2<'_> {
    /// Gets daily readiness for a range of dates.
    pub async fn daily_readiness(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<DailyReadinesses>>> {
        let path = parametise_date(
            "v2/usercollection/daily_readiness",
            start_date,
            end_date,
            next_token,
        );
        self.client.get(ctx, &path).await
    }
}
