use std::sync::Arc;

use crate::domain::common::in_flight::InFlightTracker;

/// Holds every injected collaborator; the domain service traits are
/// implemented on this type.
pub struct Service<IR, LLM, LS> {
    pub item_repository: Arc<IR>,
    pub llm_client: Arc<LLM>,
    pub local_store: Arc<LS>,
    pub in_flight: Arc<InFlightTracker>,
    pub platform_device_id: Option<String>,
}

impl<IR, LLM, LS> Clone for Service<IR, LLM, LS> {
    fn clone(&self) -> Self {
        Self {
            item_repository: Arc::clone(&self.item_repository),
            llm_client: Arc::clone(&self.llm_client),
            local_store: Arc::clone(&self.local_store),
            in_flight: Arc::clone(&self.in_flight),
            platform_device_id: self.platform_device_id.clone(),
        }
    }
}

impl<IR, LLM, LS> Service<IR, LLM, LS> {
    pub fn new(item_repository: IR, llm_client: LLM, local_store: LS) -> Self {
        Self {
            item_repository: Arc::new(item_repository),
            llm_client: Arc::new(llm_client),
            local_store: Arc::new(local_store),
            in_flight: Arc::new(InFlightTracker::default()),
            platform_device_id: None,
        }
    }

    pub fn with_platform_device_id(mut self, platform_device_id: Option<String>) -> Self {
        self.platform_device_id = platform_device_id;
        self
    }
}
