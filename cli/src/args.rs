use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use smartfridge_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_TABLE_NAME, DatabaseConfig,
    FridgeConfig, LLMConfig, LocalStoreConfig, PostgrestConfig, RowStoreConfig,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "smartfridge", version, about = "Track what is in your fridge and get recipe ideas")]
pub struct Args {
    #[command(flatten)]
    pub row_store: RowStoreArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    /// File holding the display name, device id and cached recipes
    #[arg(long, env = "SMARTFRIDGE_STORE", default_value = ".smartfridge/store.json")]
    pub store: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Hosted REST endpoint (Supabase)
    Postgrest,
    /// Direct PostgreSQL connection
    Postgres,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RowStoreArgs {
    #[arg(long = "backend", env = "ROW_STORE_BACKEND", value_enum, default_value_t = Backend::Postgrest)]
    pub backend: Backend,

    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    #[arg(long, env = "FRIDGE_TABLE", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// Emit logs as JSON lines
    #[arg(id = "log_json", long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Greeting, totals and the newest items
    Dashboard,
    #[command(subcommand)]
    Items(ItemsCommand),
    #[command(subcommand)]
    Recipes(RecipesCommand),
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Create the fridge_items table (postgres backend)
    Migrate,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ItemsCommand {
    List,
    Show {
        id: Uuid,
    },
    Add(ItemFields),
    Edit {
        id: Uuid,
        #[command(flatten)]
        fields: ItemChanges,
    },
    Remove {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ItemFields {
    #[arg(long)]
    pub name: String,

    /// Amount, e.g. 2 or 0.5
    #[arg(long, default_value = "1")]
    pub quantity: String,

    #[arg(long, default_value = "pcs")]
    pub unit: String,

    /// Expiry date as YYYY-MM-DD
    #[arg(long = "expires")]
    pub expiry_date: Option<NaiveDate>,

    #[arg(long, default_value = "Other")]
    pub category: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ItemChanges {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub quantity: Option<String>,

    #[arg(long)]
    pub unit: Option<String>,

    #[arg(long = "expires", conflicts_with = "no_expiry")]
    pub expiry_date: Option<NaiveDate>,

    /// Remove the expiry date
    #[arg(long)]
    pub no_expiry: bool,

    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RecipesCommand {
    /// Ask for new recipes based on the current inventory
    Generate,
    /// Print the recipes from the last successful generation
    Show,
    Clear,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    Show,
    SetName { name: String },
    DeviceId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set for the {1} backend")]
    Missing(&'static str, &'static str),
}

impl TryFrom<&Args> for FridgeConfig {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let row_store = match args.row_store.backend {
            Backend::Postgrest => RowStoreConfig::Postgrest(PostgrestConfig {
                url: args
                    .row_store
                    .supabase_url
                    .clone()
                    .ok_or(ConfigError::Missing("SUPABASE_URL", "postgrest"))?,
                anon_key: args
                    .row_store
                    .supabase_anon_key
                    .clone()
                    .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY", "postgrest"))?,
                table: args.row_store.table.clone(),
            }),
            Backend::Postgres => RowStoreConfig::Postgres(DatabaseConfig {
                database_url: args
                    .row_store
                    .database_url
                    .clone()
                    .ok_or(ConfigError::Missing("DATABASE_URL", "postgres"))?,
            }),
        };

        Ok(FridgeConfig {
            row_store,
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key.clone(),
                gemini_model: args.llm.gemini_model.clone(),
                gemini_base_url: args.llm.gemini_base_url.clone(),
            },
            local_store: LocalStoreConfig {
                path: args.store.clone(),
            },
        })
    }
}
