use serde::{Deserialize, Serialize};

use super::V1;
use crate::params::parametise_range;
use crate::{Context, Response, Result};

/// Recommended bedtime window, in seconds relative to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BedtimeWindow {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// A bedtime recommendation for one date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bedtime {
    pub bedtime_window: Option<BedtimeWindow>,
    pub date: String,
    /// e.g. `IDEAL_BEDTIME_AVAILABLE` or `LOW_SLEEP_SCORES`.
    pub status: Option<String>,
}

/// All ideal bedtimes for the requested period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdealBedtimes {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub ideal_bedtimes: Vec<Bedtime>,
}

impl V1<'_> {
    /// Gets the ideal bedtime recommendations between `start` and `end`.
    pub async fn bedtime(
        &self,
        ctx: &Context,
        start: &str,
        end: &str,
    ) -> Result<Response<Option<IdealBedtimes>>> {
        let path = parametise_range("v1/bedtime", start, end);
        self.client.get(ctx, &path).await
    }
}
