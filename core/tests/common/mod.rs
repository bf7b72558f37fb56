#![allow(dead_code)]

use chrono::NaiveDate;
use smartfridge_core::{
    domain::{
        common::services::Service,
        fridge_item::entities::{Category, Unit},
        fridge_item::value_objects::NewFridgeItem,
    },
    infrastructure::{
        llm::FakeLLMClient, local_store::InMemoryLocalStore,
        row_store::InMemoryFridgeItemRepository,
    },
};
use test_context::AsyncTestContext;

pub type TestService = Service<InMemoryFridgeItemRepository, FakeLLMClient, InMemoryLocalStore>;

pub const RECIPES_JSON: &str = r#"[
  {"name": "Omelette", "ingredients": ["2 eggs", "50 ml milk"], "steps": ["Whisk", "Fry"]},
  {"name": "Milkshake", "ingredients": ["200 ml milk"], "steps": ["Blend"]}
]"#;

/// A service wired to in-process adapters only.
pub struct FridgeContext {
    pub service: TestService,
}

impl AsyncTestContext for FridgeContext {
    async fn setup() -> Self {
        let service = Service::new(
            InMemoryFridgeItemRepository::new(),
            FakeLLMClient::new(),
            InMemoryLocalStore::new(),
        )
        .with_platform_device_id(Some("test-machine".to_string()));

        Self { service }
    }
}

pub fn milk() -> NewFridgeItem {
    NewFridgeItem::new(
        "Milk",
        2.0,
        Unit::Litre,
        NaiveDate::from_ymd_opt(2030, 1, 10),
        Category::Dairy,
    )
}

pub fn eggs() -> NewFridgeItem {
    NewFridgeItem::new("Eggs", 12.0, Unit::Pieces, None, Category::Other)
}
