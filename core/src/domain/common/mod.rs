use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod in_flight;
pub mod services;

pub const DEFAULT_TABLE_NAME: &str = "fridge_items";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct FridgeConfig {
    pub row_store: RowStoreConfig,
    pub llm: LLMConfig,
    pub local_store: LocalStoreConfig,
}

#[derive(Clone, Debug)]
pub enum RowStoreConfig {
    Postgrest(PostgrestConfig),
    Postgres(DatabaseConfig),
}

#[derive(Clone, Debug)]
pub struct PostgrestConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub database_url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct LocalStoreConfig {
    pub path: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
