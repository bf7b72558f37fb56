use chrono::{DateTime, FixedOffset, Timelike, Utc};
use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, in_flight::RequestKind, services::Service},
    dashboard::{
        ports::DashboardService,
        value_objects::{DashboardOverview, DashboardSummary, Greeting, RECENT_ITEMS},
    },
    device_profile::{entities::DEFAULT_DISPLAY_NAME, services::load_display_name},
    fridge_item::{ports::FridgeItemRepository, value_objects::ItemView},
    local_store::ports::LocalStore,
    recipe::ports::LLMClient,
};

impl<IR, LLM, LS> DashboardService for Service<IR, LLM, LS>
where
    IR: FridgeItemRepository,
    LLM: LLMClient,
    LS: LocalStore,
{
    #[instrument(skip(self))]
    async fn overview(&self, now: DateTime<FixedOffset>) -> Result<DashboardOverview, CoreError> {
        let _guard = self.in_flight.try_begin(RequestKind::LoadItems)?;

        let instant = now.with_timezone(&Utc);
        let items = self.item_repository.list().await?;

        let summary = DashboardSummary::from_items(&items, instant);
        debug!(total = summary.total, expiring_soon = summary.expiring_soon, "dashboard loaded");

        let display_name = load_display_name(self.local_store.as_ref())
            .await
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        Ok(DashboardOverview {
            greeting: Greeting::for_hour(now.hour()),
            display_name,
            summary,
            recent: items
                .into_iter()
                .take(RECENT_ITEMS)
                .map(|item| ItemView::new(item, instant))
                .collect(),
        })
    }
}
