use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, device_profile::entities::DeviceProfile};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn profile(&self) -> impl Future<Output = Result<DeviceProfile, CoreError>> + Send;

    /// Stores the trimmed name and returns it.
    fn set_display_name(&self, name: String) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn device_id(&self) -> impl Future<Output = Result<String, CoreError>> + Send;
}
