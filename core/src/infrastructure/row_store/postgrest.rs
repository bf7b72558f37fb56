use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{PostgrestConfig, entities::app_errors::CoreError},
        fridge_item::{entities::FridgeItem, ports::FridgeItemRepository, value_objects::NewFridgeItem},
    },
    infrastructure::row_store::{mappers::FridgeItemRow, postgres::UNDEFINED_TABLE},
};

/// PostgREST reports a table it cannot see in its schema cache with this code.
const SCHEMA_CACHE_MISS: &str = "PGRST205";

/// Client for a hosted PostgREST endpoint (`{url}/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct PostgrestFridgeItemRepository {
    base_url: String,
    table: String,
    anon_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl PostgrestFridgeItemRepository {
    pub fn new(config: PostgrestConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            table: config.table,
            anon_key: config.anon_key,
            client: Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
    }

    async fn send(&self, action: &str, builder: RequestBuilder) -> Result<Vec<FridgeItem>, CoreError> {
        let response = self.request(builder).send().await.map_err(|e| {
            error!("Failed to {}: {}", action, e);
            CoreError::RowStore(format!("Row store request failed: {}", e))
        })?;

        let response = check_status(action, response).await?;

        let rows: Vec<FridgeItemRow> = response.json().await.map_err(|e| {
            error!("Failed to decode rows for {}: {}", action, e);
            CoreError::RowStore(format!("Failed to decode row store response: {}", e))
        })?;

        Ok(rows.into_iter().map(FridgeItem::from).collect())
    }
}

async fn check_status(action: &str, response: Response) -> Result<Response, CoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<PostgrestError>(&body).ok();
    let code = parsed.as_ref().and_then(|e| e.code.as_deref());

    if matches!(code, Some(UNDEFINED_TABLE) | Some(SCHEMA_CACHE_MISS)) {
        error!("Failed to {}: fridge_items table is missing ({})", action, body);
        return Err(CoreError::TableNotFound);
    }

    let message = parsed
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or(body);
    error!("Failed to {}: {} - {}", action, status, message);

    Err(CoreError::RowStore(format!("{} - {}", status, message)))
}

fn id_filter(id: Uuid) -> (&'static str, String) {
    ("id", format!("eq.{}", id))
}

impl FridgeItemRepository for PostgrestFridgeItemRepository {
    async fn insert(&self, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let builder = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[item]);

        self.send("create fridge item", builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::RowStore("Insert returned no row".to_string()))
    }

    async fn update(&self, id: Uuid, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let builder = self
            .client
            .patch(self.table_url())
            .query(&[id_filter(id)])
            .header("Prefer", "return=representation")
            .json(&item);

        self.send("update fridge item", builder)
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let builder = self
            .client
            .delete(self.table_url())
            .query(&[id_filter(id)])
            .header("Prefer", "return=representation");

        let deleted = self.send("delete fridge item", builder).await?;
        if deleted.is_empty() {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<FridgeItem>, CoreError> {
        let builder = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        self.send("get fridge items", builder).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FridgeItem>, CoreError> {
        let builder = self
            .client
            .get(self.table_url())
            .query(&[("select", "*".to_string()), id_filter(id)]);

        let items = self.send("get fridge item by id", builder).await?;
        Ok(items.into_iter().next())
    }
}
