use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    fridge_item::{entities::FridgeItem, ports::FridgeItemRepository, value_objects::NewFridgeItem},
};

/// Row store kept in process memory, for tests.
#[derive(Debug, Default)]
pub struct InMemoryFridgeItemRepository {
    rows: RwLock<Vec<FridgeItem>>,
}

impl InMemoryFridgeItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with rows as-is, keeping their ids and timestamps.
    pub fn with_items(items: Vec<FridgeItem>) -> Self {
        Self {
            rows: RwLock::new(items),
        }
    }
}

fn apply(item: &mut FridgeItem, changes: NewFridgeItem) {
    item.name = changes.name;
    item.quantity = changes.quantity;
    item.unit = changes.unit;
    item.expiry_date = changes.expiry_date;
    item.category = changes.category;
}

impl FridgeItemRepository for InMemoryFridgeItemRepository {
    async fn insert(&self, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let created = FridgeItem {
            id: generate_uuid_v7(),
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
            expiry_date: item.expiry_date,
            category: item.category,
            created_at: Utc::now(),
        };

        self.rows.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(CoreError::NotFound)?;

        apply(row, item);
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == before {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<FridgeItem>, CoreError> {
        let mut rows = self.rows.read().await.clone();
        // Newest first; equal timestamps keep the later insert first
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FridgeItem>, CoreError> {
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }
}
