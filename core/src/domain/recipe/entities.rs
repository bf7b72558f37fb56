use serde::{Deserialize, Serialize};

/// A suggestion returned by the completion endpoint. Only ever cached
/// locally, never written to the row store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Each entry embeds its quantity, e.g. "200g flour".
    pub ingredients: Vec<String>,
    /// Execution order.
    pub steps: Vec<String>,
}
