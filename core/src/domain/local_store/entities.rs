use std::fmt;

/// The named slots of on-device storage. Each slot holds one string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalSlot {
    DisplayName,
    DeviceId,
    /// JSON-encoded `Vec<Recipe>` of the last successful generation.
    CachedRecipes,
}

impl LocalSlot {
    pub fn key(&self) -> &'static str {
        match self {
            LocalSlot::DisplayName => "userName",
            LocalSlot::DeviceId => "@smartfridge_device_id",
            LocalSlot::CachedRecipes => "@smartfridge_cached_recipes",
        }
    }
}

impl fmt::Display for LocalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
