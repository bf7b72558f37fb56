use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Creates the `fridge_items` table if it does not exist yet.
    pub async fn run_migrations(&self) -> Result<(), anyhow::Error> {
        let pool = self.db.get_postgres_connection_pool();
        sqlx::migrate!("./migrations").run(pool).await?;

        info!("database migrations applied");
        Ok(())
    }
}
