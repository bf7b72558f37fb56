use std::fmt;

use serde::Serialize;
use tracing::{error, warn};

use crate::domain::common::{entities::app_errors::CoreError, in_flight::RequestKind};

pub const TABLE_SETUP_MESSAGE: &str = "Please create the fridge_items table in Supabase first.";

/// What the user is shown when an operation fails or succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }

    /// Renders a failure for the user and logs the detail. `kind` picks the
    /// generic message for backend failures.
    pub fn from_failure(kind: Option<RequestKind>, err: &CoreError) -> Self {
        let request = kind.map(|k| k.as_str()).unwrap_or("other");
        if err.is_validation() {
            warn!(request, "rejected input: {}", err);
        } else {
            error!(request, "request failed: {}", err);
        }

        match err {
            CoreError::TableNotFound => Self::new("Setup required", TABLE_SETUP_MESSAGE),
            CoreError::InvalidName => Self::new("Error", "Please enter item name"),
            CoreError::InvalidQuantity => Self::new("Error", "Please enter valid quantity"),
            CoreError::InvalidDisplayName => Self::new("Error", "Please enter a valid name"),
            CoreError::NoItems => Self::new("No Items", "Please add some items to your fridge first"),
            CoreError::NotFound => Self::new("Error", "Item not found"),
            CoreError::Completion(failure) => Self::new("Error", failure.user_message()),
            CoreError::RequestInFlight(busy) => Self::new(
                "Please wait",
                format!("A {} request is already in progress", busy),
            ),
            CoreError::RecipeResponse(_)
            | CoreError::RowStore(_)
            | CoreError::LocalStore(_) => Self::new("Error", generic_message(kind)),
        }
    }
}

fn generic_message(kind: Option<RequestKind>) -> &'static str {
    match kind {
        Some(RequestKind::LoadItems) => "Failed to load items",
        Some(RequestKind::SaveItem) => "Failed to save item",
        Some(RequestKind::DeleteItem) => "Failed to delete item",
        Some(RequestKind::GenerateRecipes) => "Failed to generate recipes. Please try again.",
        None => "Something went wrong. Please try again.",
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
