use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "Chef";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub device_id: String,
    pub display_name: String,
}

impl DeviceProfile {
    pub fn new(device_id: String, display_name: Option<String>) -> Self {
        Self {
            device_id,
            display_name: display_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        }
    }
}
