use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// LLM Client trait for calling the completion endpoint
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw completion text. Failures are reported as
    /// `CoreError::Completion` with a classified kind.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Asks for recipes based on the current inventory and replaces the
    /// cached set with the validated result.
    fn generate_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn cached_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn clear_cached_recipes(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
