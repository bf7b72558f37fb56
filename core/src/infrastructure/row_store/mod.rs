pub mod in_memory;
pub mod mappers;
pub mod postgres;
pub mod postgrest;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fridge_item::{entities::FridgeItem, ports::FridgeItemRepository, value_objects::NewFridgeItem},
};

pub use in_memory::InMemoryFridgeItemRepository;
pub use postgres::PostgresFridgeItemRepository;
pub use postgrest::PostgrestFridgeItemRepository;

/// The configured row store backend.
#[derive(Debug, Clone)]
pub enum RowStoreRepository {
    Postgrest(PostgrestFridgeItemRepository),
    Postgres(PostgresFridgeItemRepository),
}

impl FridgeItemRepository for RowStoreRepository {
    async fn insert(&self, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        match self {
            RowStoreRepository::Postgrest(repo) => repo.insert(item).await,
            RowStoreRepository::Postgres(repo) => repo.insert(item).await,
        }
    }

    async fn update(&self, id: Uuid, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        match self {
            RowStoreRepository::Postgrest(repo) => repo.update(id, item).await,
            RowStoreRepository::Postgres(repo) => repo.update(id, item).await,
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        match self {
            RowStoreRepository::Postgrest(repo) => repo.delete(id).await,
            RowStoreRepository::Postgres(repo) => repo.delete(id).await,
        }
    }

    async fn list(&self) -> Result<Vec<FridgeItem>, CoreError> {
        match self {
            RowStoreRepository::Postgrest(repo) => repo.list().await,
            RowStoreRepository::Postgres(repo) => repo.list().await,
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FridgeItem>, CoreError> {
        match self {
            RowStoreRepository::Postgrest(repo) => repo.get_by_id(id).await,
            RowStoreRepository::Postgres(repo) => repo.get_by_id(id).await,
        }
    }
}
