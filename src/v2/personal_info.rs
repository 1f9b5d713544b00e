use serde::{Deserialize, Serialize};

use super::V2;
use crate::{Context, Response, Result};

/// Personal information of the authenticated user.
///
/// Each field is `None` unless the user consented to the matching scope or
/// provided the data to Oura.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PersonalInfo {
    pub id: Option<String>,
    pub age: Option<i32>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Meters.
    pub height: Option<f64>,
    pub biological_sex: Option<String>,
    pub email: Option<String>,
}

impl V2<'_> {
    /// Gets the personal information of the user the access token belongs to.
    pub async fn personal_info(&self, ctx: &Context) -> Result<Response<Option<PersonalInfo>>> {
        self.client.get(ctx, "v2/usercollection/personal_info").await
    }
}
