use tracing::info;

use crate::{
    domain::common::{DatabaseConfig, FridgeConfig, RowStoreConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::GeminiLLMClient,
        local_store::FileLocalStore,
        platform::platform_device_id,
        row_store::{PostgresFridgeItemRepository, PostgrestFridgeItemRepository, RowStoreRepository},
    },
};

pub mod alert;

pub use alert::Alert;

pub type FridgeService = Service<RowStoreRepository, GeminiLLMClient, FileLocalStore>;

pub async fn create_service(config: FridgeConfig) -> Result<FridgeService, anyhow::Error> {
    let item_repository = match config.row_store {
        RowStoreConfig::Postgrest(postgrest) => {
            info!(url = %postgrest.url, table = %postgrest.table, "using PostgREST row store");
            RowStoreRepository::Postgrest(PostgrestFridgeItemRepository::new(postgrest))
        }
        RowStoreConfig::Postgres(database) => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: database.database_url,
            })
            .await?;
            info!("using PostgreSQL row store");
            RowStoreRepository::Postgres(PostgresFridgeItemRepository::new(postgres.get_db()))
        }
    };

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );
    let local_store = FileLocalStore::new(config.local_store.path);

    Ok(Service::new(item_repository, llm_client, local_store)
        .with_platform_device_id(platform_device_id().await))
}

/// Creates the `fridge_items` table on a directly reachable database.
pub async fn run_migrations(config: DatabaseConfig) -> Result<(), anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database_url,
    })
    .await?;

    postgres.run_migrations().await
}
