use std::future::Future;

use chrono::{DateTime, FixedOffset};

use crate::domain::{common::entities::app_errors::CoreError, dashboard::value_objects::DashboardOverview};

#[cfg_attr(test, mockall::automock)]
pub trait DashboardService: Send + Sync {
    /// `now` carries the local offset; the greeting uses its wall-clock hour
    /// and expiry classification uses the instant.
    fn overview(
        &self,
        now: DateTime<FixedOffset>,
    ) -> impl Future<Output = Result<DashboardOverview, CoreError>> + Send;
}
