use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Page, V2};
use crate::params::parametise_date;
use crate::{Context, Response, Result};

/// A tag the user added in the app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub id: Option<String>,
    pub day: String,
    pub timestamp: DateTime<FixedOffset>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub tags: Vec<String>,
}

/// A page of [`Tag`] records.
pub type Tags = Page<Tag>;

impl V2<'_> {
    /// Gets tags for a range of dates.
    pub async fn tag(
        &self,
        ctx: &Context,
        start_date: &str,
        end_date: &str,
        next_token: &str,
    ) -> Result<Response<Option<Tags>>> {
        let path = parametise_date("v2/usercollection/tag", start_date, end_date, next_token);
        self.client.get(ctx, &path).await
    }
}
