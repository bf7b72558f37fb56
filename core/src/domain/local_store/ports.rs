use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, local_store::entities::LocalSlot};

/// On-device key-value storage, injected wherever a slot is read or written.
#[cfg_attr(test, mockall::automock)]
pub trait LocalStore: Send + Sync {
    fn get(&self, slot: LocalSlot) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, slot: LocalSlot, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self, slot: LocalSlot) -> impl Future<Output = Result<(), CoreError>> + Send;
}
