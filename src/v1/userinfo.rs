use serde::{Deserialize, Serialize};

use super::V1;
use crate::{Context, Response, Result};

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserInfo {
    pub age: Option<i32>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Centimetres.
    pub height: Option<f64>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl V1<'_> {
    /// Gets the profile of the user the access token belongs to.
    pub async fn user_info(&self, ctx: &Context) -> Result<Response<Option<UserInfo>>> {
        self.client.get(ctx, "v1/userinfo").await
    }
}
