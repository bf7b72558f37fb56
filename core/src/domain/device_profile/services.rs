use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    device_profile::{entities::DeviceProfile, ports::ProfileService},
    fridge_item::ports::FridgeItemRepository,
    local_store::{entities::LocalSlot, ports::LocalStore},
    recipe::ports::LLMClient,
};

impl<IR, LLM, LS> ProfileService for Service<IR, LLM, LS>
where
    IR: FridgeItemRepository,
    LLM: LLMClient,
    LS: LocalStore,
{
    #[instrument(skip(self))]
    async fn profile(&self) -> Result<DeviceProfile, CoreError> {
        let device_id =
            get_or_create_device_id(self.local_store.as_ref(), self.platform_device_id.as_deref())
                .await;
        let display_name = load_display_name(self.local_store.as_ref()).await;

        Ok(DeviceProfile::new(device_id, display_name))
    }

    #[instrument(skip(self, name))]
    async fn set_display_name(&self, name: String) -> Result<String, CoreError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::InvalidDisplayName);
        }

        self.local_store
            .set(LocalSlot::DisplayName, name.clone())
            .await?;

        Ok(name)
    }

    #[instrument(skip(self))]
    async fn device_id(&self) -> Result<String, CoreError> {
        Ok(
            get_or_create_device_id(self.local_store.as_ref(), self.platform_device_id.as_deref())
                .await,
        )
    }
}

/// Stored display name, if any. Read failures are logged and treated as absent.
pub async fn load_display_name<LS: LocalStore>(local_store: &LS) -> Option<String> {
    match local_store.get(LocalSlot::DisplayName).await {
        Ok(name) => name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            error!("Error loading display name: {}", e);
            None
        }
    }
}

/// Helper function to get or create the device identifier.
///
/// The stored identifier wins; otherwise the platform identifier is adopted,
/// and failing that a random UUID is generated. Whatever is chosen is saved.
pub async fn get_or_create_device_id<LS: LocalStore>(
    local_store: &LS,
    platform_id: Option<&str>,
) -> String {
    // 1. Try the stored identifier
    match local_store.get(LocalSlot::DeviceId).await {
        Ok(Some(stored)) if !stored.trim().is_empty() => return stored,
        Ok(_) => {}
        Err(e) => {
            error!("Error getting device ID: {}", e);
            let fallback = Uuid::new_v4().to_string();
            save_device_id(local_store, &fallback).await;
            return fallback;
        }
    }

    // 2. Platform identifier, else a random one
    let device_id = platform_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // 3. Store it for next time
    save_device_id(local_store, &device_id).await;
    info!(device = %hash_device_id(&device_id), "device id created");

    device_id
}

async fn save_device_id<LS: LocalStore>(local_store: &LS, device_id: &str) {
    if let Err(e) = local_store
        .set(LocalSlot::DeviceId, device_id.to_string())
        .await
    {
        error!("Failed to store device ID: {}", e);
    }
}

/// Short stable fingerprint of a device id, safe to write to logs.
pub fn hash_device_id(device_id: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(device_id.as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}
