use thiserror::Error;

use crate::domain::{
    common::in_flight::RequestKind,
    recipe::{CompletionFailure, RecipeResponseError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The backing table is missing (PostgreSQL `42P01`, "relation does not exist").
    #[error("fridge_items table does not exist")]
    TableNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Item name must not be empty")]
    InvalidName,

    #[error("Quantity must be a finite, non-negative number")]
    InvalidQuantity,

    #[error("Display name must not be empty")]
    InvalidDisplayName,

    #[error("No items in the fridge")]
    NoItems,

    #[error("Row store error: {0}")]
    RowStore(String),

    #[error("Completion endpoint error: {0}")]
    Completion(#[from] CompletionFailure),

    #[error("Invalid recipe response: {0}")]
    RecipeResponse(#[from] RecipeResponseError),

    #[error("Local storage error: {0}")]
    LocalStore(String),

    #[error("A {0} request is already in progress")]
    RequestInFlight(RequestKind),
}

impl CoreError {
    /// Validation failures are raised before any request leaves the client.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidName | CoreError::InvalidQuantity | CoreError::InvalidDisplayName
        )
    }
}
