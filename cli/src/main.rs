use std::process::ExitCode;

use clap::Parser;
use smartfridge_core::{
    application::{Alert, create_service, run_migrations},
    domain::common::{DatabaseConfig, FridgeConfig, RowStoreConfig},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::{
    args::{Args, Command, LogArgs},
    commands::CommandError,
    render::Output,
};

mod args;
mod commands;
mod render;
mod validators;

fn init_tracing(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, anyhow::Error> {
    let config = FridgeConfig::try_from(&args)?;
    debug!(store = %config.local_store.path.display(), "configuration loaded");

    if let Command::Migrate = args.command {
        let RowStoreConfig::Postgres(database) = config.row_store else {
            anyhow::bail!("migrate needs the postgres backend (ROW_STORE_BACKEND=postgres)");
        };
        migrate(database).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let service = create_service(config).await?;
    let output = Output::from_flag(args.json);

    let result = match args.command {
        Command::Dashboard => commands::dashboard::run(&service, output).await,
        Command::Items(command) => commands::items::run(&service, command, output).await,
        Command::Recipes(command) => commands::recipes::run(&service, command, output).await,
        Command::Profile(command) => commands::profile::run(&service, command, output).await,
        Command::Migrate => Ok(()),
    };

    report(result)
}

/// Core failures end as an alert on stderr. `Alert::from_failure` has
/// already logged them.
fn report(result: Result<(), CommandError>) -> Result<ExitCode, anyhow::Error> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CommandError::Core { kind, source }) => {
            eprintln!("{}", Alert::from_failure(kind, &source));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

async fn migrate(database: DatabaseConfig) -> Result<(), anyhow::Error> {
    run_migrations(database).await?;
    println!("fridge_items table is ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use smartfridge_core::domain::common::{entities::app_errors::CoreError, in_flight::RequestKind};

    use super::*;

    #[test]
    fn test_core_failure_becomes_exit_code() {
        let result = Err(CommandError::Core {
            kind: Some(RequestKind::LoadItems),
            source: CoreError::RowStore("connection refused".to_string()),
        });

        assert_eq!(report(result).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_other_failures_are_returned() {
        let result = Err(CommandError::Prompt(std::io::Error::other("closed stdin")));

        let err = report(result).unwrap_err();
        assert!(err.to_string().contains("closed stdin"));
    }

    #[test]
    fn test_success_exits_cleanly() {
        assert_eq!(report(Ok(())).unwrap(), ExitCode::SUCCESS);
    }
}
