use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Apply pending migrations to DATABASE_URL")]
    Migrate,

    #[command(about = "Check that DATABASE_URL accepts connections")]
    Ping,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config::config().database).await?;

    match cmd {
        DbCommands::Migrate => {
            DatabaseManager::migrate(&pool).await?;
            utils::output_success(output_format, "Migrations applied", None)
        }
        DbCommands::Ping => {
            DatabaseManager::health_check(&pool).await?;
            utils::output_success(output_format, "Database reachable", None)
        }
    }
}
