mod common;

use common::{FridgeContext, RECIPES_JSON, eggs, milk};
use smartfridge_core::domain::{
    common::{entities::app_errors::CoreError, in_flight::RequestKind},
    fridge_item::ports::FridgeItemService,
    recipe::{CompletionFailure, RecipeResponseError, ports::RecipeService},
};
use test_context::test_context;

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_empty_inventory_sends_nothing(ctx: &mut FridgeContext) {
    assert_eq!(
        ctx.service.generate_recipes().await.unwrap_err(),
        CoreError::NoItems
    );
    assert!(ctx.service.llm_client.prompts().await.is_empty());
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_generate_caches_and_clears(ctx: &mut FridgeContext) {
    ctx.service.add_item(milk()).await.unwrap();
    ctx.service.add_item(eggs()).await.unwrap();
    ctx.service.llm_client.push_response(RECIPES_JSON).await;

    let recipes = ctx.service.generate_recipes().await.unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].name, "Omelette");

    let prompts = ctx.service.llm_client.prompts().await;
    assert!(prompts[0].contains("12 pcs Eggs, 2 L Milk"));

    assert_eq!(ctx.service.cached_recipes().await.unwrap(), recipes);

    ctx.service.clear_cached_recipes().await.unwrap();
    assert!(ctx.service.cached_recipes().await.unwrap().is_empty());
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_fenced_response_is_accepted(ctx: &mut FridgeContext) {
    ctx.service.add_item(milk()).await.unwrap();
    let fenced = format!("```json\n{}\n```", RECIPES_JSON);
    ctx.service.llm_client.push_response(&fenced).await;

    let recipes = ctx.service.generate_recipes().await.unwrap();
    assert_eq!(recipes[1].name, "Milkshake");
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_failed_generation_keeps_previous_cache(ctx: &mut FridgeContext) {
    ctx.service.add_item(milk()).await.unwrap();
    ctx.service.llm_client.push_response(RECIPES_JSON).await;
    let first = ctx.service.generate_recipes().await.unwrap();

    ctx.service.llm_client.push_response("Sorry, I can't help with that.").await;
    assert!(matches!(
        ctx.service.generate_recipes().await.unwrap_err(),
        CoreError::RecipeResponse(RecipeResponseError::Parse(_))
    ));

    ctx.service.llm_client.push_response(r#"{"name": "x"}"#).await;
    assert_eq!(
        ctx.service.generate_recipes().await.unwrap_err(),
        CoreError::RecipeResponse(RecipeResponseError::Shape)
    );

    ctx.service
        .llm_client
        .push_error(CompletionFailure::QuotaExceeded.into())
        .await;
    assert_eq!(
        ctx.service.generate_recipes().await.unwrap_err(),
        CoreError::Completion(CompletionFailure::QuotaExceeded)
    );

    assert_eq!(ctx.service.cached_recipes().await.unwrap(), first);
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_overlapping_generation_is_refused(ctx: &mut FridgeContext) {
    ctx.service.add_item(milk()).await.unwrap();
    ctx.service.llm_client.push_response(RECIPES_JSON).await;

    let guard = ctx
        .service
        .in_flight
        .try_begin(RequestKind::GenerateRecipes)
        .unwrap();
    assert_eq!(
        ctx.service.generate_recipes().await.unwrap_err(),
        CoreError::RequestInFlight(RequestKind::GenerateRecipes)
    );
    assert!(ctx.service.llm_client.prompts().await.is_empty());

    drop(guard);
    assert_eq!(ctx.service.generate_recipes().await.unwrap().len(), 2);
}
