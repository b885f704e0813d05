//! holocron-sync
//!
//! Command-line tool that prepares the catalog schema and pulls the upstream
//! catalog into it.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use holocron_swapi::{SwapiClient, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "holocron-sync")]
#[command(about = "Initialize the catalog database and sync it from SWAPI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations, optionally dropping every catalog table first
    InitDb {
        /// Drop all catalog tables (and their data) before migrating
        #[arg(long)]
        drop: bool,
    },

    /// Sync films, then starships, then characters from the upstream catalog
    SyncAll {
        /// Base URL of the upstream catalog API
        #[arg(long, env = "SWAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holocron_sync=info,holocron_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let pool = holocron_db::create_pool(&cli.database_url).await?;

    match cli.command {
        Commands::InitDb { drop } => {
            if drop {
                holocron_db::drop_schema(&pool).await?;
            }
            holocron_db::run_migrations(&pool).await?;
            println!("Database initialized");
        }
        Commands::SyncAll { base_url } => {
            let client = SwapiClient::new(base_url);
            tracing::info!(base_url = client.base_url(), "Starting sync");

            let report = holocron_sync::sync_all(&pool, &client).await?;
            print!("{report}");
            println!("All data synced");
        }
    }

    pool.close().await;
    Ok(())
}
