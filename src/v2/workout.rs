use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// A workout, detected automatically or entered by the user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Workout {
    pub id: Option<String>,
    pub activity: String,
    pub day: String,
    pub start_datetime: DateTime<FixedOffset>,
    pub end_datetime: DateTime<FixedOffset>,
    /// Kilocalories.
    pub calories: Option<f64>,
    /// Meters.
    pub distance: Option<f64>,
    /// `easy`, `moderate` or `hard`.
    pub intensity: String,
    pub label: Option<String>,
    /// e.g. `manual`, `autodetected`, `confirmed`, `workout_heart_rate`.
    pub source: String,
}

/// A page of [`Workout`] records.
pub type Workouts = Page<Workout>;

impl V2<'_> {
    /// Gets workouts for a range of dates.
    pub async fn workout(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<Workouts>>> {
        let path = parametise_date("v2/usercollection/workout", start_date, end_date, next_token);
        self.client.get(ctx, &path).await
    }
}
