use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fridge_item::{
        entities::FridgeItem,
        value_objects::{ItemView, NewFridgeItem},
    },
};

/// Access to the single `fridge_items` table of the row store.
#[cfg_attr(test, mockall::automock)]
pub trait FridgeItemRepository: Send + Sync {
    fn insert(&self, item: NewFridgeItem) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn update(
        &self,
        id: Uuid,
        item: NewFridgeItem,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// All rows, newest `created_at` first.
    fn list(&self) -> impl Future<Output = Result<Vec<FridgeItem>, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<FridgeItem>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FridgeItemService: Send + Sync {
    fn list_items(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<ItemView>, CoreError>> + Send;

    fn get_item(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<ItemView, CoreError>> + Send;

    fn add_item(&self, item: NewFridgeItem) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn update_item(
        &self,
        id: Uuid,
        item: NewFridgeItem,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn delete_item(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
