use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    local_store::{entities::LocalSlot, ports::LocalStore},
};

#[derive(Debug, Default)]
pub struct InMemoryLocalStore {
    slots: RwLock<HashMap<LocalSlot, String>>,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for InMemoryLocalStore {
    async fn get(&self, slot: LocalSlot) -> Result<Option<String>, CoreError> {
        Ok(self.slots.read().await.get(&slot).cloned())
    }

    async fn set(&self, slot: LocalSlot, value: String) -> Result<(), CoreError> {
        self.slots.write().await.insert(slot, value);
        Ok(())
    }

    async fn clear(&self, slot: LocalSlot) -> Result<(), CoreError> {
        self.slots.write().await.remove(&slot);
        Ok(())
    }
}
