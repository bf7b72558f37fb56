use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, in_flight::RequestKind, services::Service},
    fridge_item::ports::FridgeItemRepository,
    local_store::{entities::LocalSlot, ports::LocalStore},
    recipe::{
        entities::Recipe,
        parser::parse_recipe_response,
        ports::{LLMClient, RecipeService},
        prompt::{build_recipe_prompt, recipe_response_schema},
    },
};

impl<IR, LLM, LS> RecipeService for Service<IR, LLM, LS>
where
    IR: FridgeItemRepository,
    LLM: LLMClient,
    LS: LocalStore,
{
    #[instrument(skip(self))]
    async fn generate_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        // 1. Refuse overlapping generations
        let _guard = self.in_flight.try_begin(RequestKind::GenerateRecipes)?;

        // 2. Current inventory
        let items = self.item_repository.list().await?;
        if items.is_empty() {
            return Err(CoreError::NoItems);
        }

        // 3. Call LLM
        let prompt = build_recipe_prompt(&items);
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, Some(recipe_response_schema()))
            .await?;

        // 4. Sanitize and validate
        let recipes = parse_recipe_response(&raw_response)?;

        // 5. Replace the cached set
        match serde_json::to_string(&recipes) {
            Ok(encoded) => {
                if let Err(e) = self.local_store.set(LocalSlot::CachedRecipes, encoded).await {
                    error!("Failed to cache recipes: {}", e);
                }
            }
            Err(e) => error!("Failed to encode recipes: {}", e),
        }

        info!(count = recipes.len(), "recipes generated");
        Ok(recipes)
    }

    #[instrument(skip(self))]
    async fn cached_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        let Some(encoded) = self.local_store.get(LocalSlot::CachedRecipes).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Recipe>>(&encoded) {
            Ok(recipes) => Ok(recipes),
            Err(e) => {
                warn!("Ignoring unreadable recipe cache: {}", e);
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self))]
    async fn clear_cached_recipes(&self) -> Result<(), CoreError> {
        self.local_store.clear(LocalSlot::CachedRecipes).await?;

        info!("recipe cache cleared");
        Ok(())
    }
}
