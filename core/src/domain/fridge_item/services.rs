use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, in_flight::RequestKind, services::Service},
    fridge_item::{
        entities::FridgeItem,
        ports::{FridgeItemRepository, FridgeItemService},
        value_objects::{ItemView, NewFridgeItem},
    },
    local_store::ports::LocalStore,
    recipe::ports::LLMClient,
};

impl<IR, LLM, LS> FridgeItemService for Service<IR, LLM, LS>
where
    IR: FridgeItemRepository,
    LLM: LLMClient,
    LS: LocalStore,
{
    #[instrument(skip(self))]
    async fn list_items(&self, now: DateTime<Utc>) -> Result<Vec<ItemView>, CoreError> {
        let _guard = self.in_flight.try_begin(RequestKind::LoadItems)?;

        let items = self.item_repository.list().await?;

        Ok(items
            .into_iter()
            .map(|item| ItemView::new(item, now))
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_item(&self, id: Uuid, now: DateTime<Utc>) -> Result<ItemView, CoreError> {
        let item = self
            .item_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(ItemView::new(item, now))
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn add_item(&self, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        // 1. Validate before anything is sent
        let item = item.validate()?;

        // 2. Insert
        let _guard = self.in_flight.try_begin(RequestKind::SaveItem)?;
        let created = self.item_repository.insert(item).await?;

        info!(id = %created.id, "item added");
        Ok(created)
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn update_item(&self, id: Uuid, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let item = item.validate()?;

        let _guard = self.in_flight.try_begin(RequestKind::SaveItem)?;
        let updated = self.item_repository.update(id, item).await?;

        info!(id = %updated.id, "item updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: Uuid) -> Result<(), CoreError> {
        let _guard = self.in_flight.try_begin(RequestKind::DeleteItem)?;

        // Verify item exists
        let _item = self
            .item_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.item_repository.delete(id).await?;

        info!("item deleted");
        Ok(())
    }
}
