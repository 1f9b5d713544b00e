//! Legacy v1 endpoints.
//!
//! Range queries take plain `start` / `end` dates and are not paginated. When a
//! bound is an empty string the API default applies: one week ago for the
//! start, the current day for the end.

mod activity;
mod bedtime;
mod readiness;
mod sleep;
mod userinfo;

pub use activity::{Activities, Activity};
pub use bedtime::{Bedtime, BedtimeWindow, IdealBedtimes};
pub use readiness::{Readiness, ReadinessSummaries};
pub use sleep::{Sleep, Sleeps};
pub use userinfo::UserInfo;

use crate::Client;

/// Handle on the v1 endpoints, obtained from [`Client::v1`].
///
/// # Example
///
/// ```no_run
/// # async fn example(client: oura_client::Client) -> oura_client::Result<()> {
/// let ctx = oura_client::Context::background();
/// let sleep = client.v1().sleep(&ctx, "2020-01-20", "2020-01-22").await?;
/// if let Some(sleeps) = sleep.into_data() {
///     for night in sleeps.sleep {
///         println!("{}: {:?}", night.summary_date, night.score);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct V1<'a> {
    client: &'a Client,
}

impl<'a> V1<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}
