use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::PathBuf,
};

use tokio::{fs, sync::Mutex};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    local_store::{entities::LocalSlot, ports::LocalStore},
};

type Slots = BTreeMap<String, String>;

/// Slots persisted as one JSON object on disk, keyed by the slot key.
#[derive(Debug)]
pub struct FileLocalStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_slots(&self) -> Result<Slots, CoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => {
                error!("Failed to read local store {}: {}", self.path.display(), e);
                return Err(CoreError::LocalStore(e.to_string()));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to decode local store {}: {}", self.path.display(), e);
            CoreError::LocalStore(format!("Corrupt local store: {}", e))
        })
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), CoreError> {
        let encoded = serde_json::to_vec_pretty(slots)
            .map_err(|e| CoreError::LocalStore(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create {}: {}", parent.display(), e);
                CoreError::LocalStore(e.to_string())
            })?;
        }

        // Replaced through a sibling temp file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp.display(), e);
            CoreError::LocalStore(e.to_string())
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            error!("Failed to replace {}: {}", self.path.display(), e);
            CoreError::LocalStore(e.to_string())
        })
    }
}

impl LocalStore for FileLocalStore {
    async fn get(&self, slot: LocalSlot) -> Result<Option<String>, CoreError> {
        let _lock = self.lock.lock().await;
        let slots = self.read_slots().await?;
        Ok(slots.get(slot.key()).cloned())
    }

    async fn set(&self, slot: LocalSlot, value: String) -> Result<(), CoreError> {
        let _lock = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        slots.insert(slot.key().to_string(), value);
        self.write_slots(&slots).await
    }

    async fn clear(&self, slot: LocalSlot) -> Result<(), CoreError> {
        let _lock = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        if slots.remove(slot.key()).is_none() {
            return Ok(());
        }
        self.write_slots(&slots).await
    }
}
