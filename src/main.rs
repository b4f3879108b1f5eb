use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rugby_stats::config::AppConfig;
use rugby_stats::models::{
    Club, KickDetail, Lineup, LineoutDetail, Match, MatchUlid, Player, Season, StatRecord,
    StatType, Team,
};
use rugby_stats::storage::{EntityType, JsonlWriter, StorageConfig};
use rugby_stats::store::ClubStore;
use rugby_stats::views;

#[derive(Parser)]
#[command(name = "rugby-stats")]
#[command(about = "Rugby club statistics tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Log all HTTP requests
        #[arg(long)]
        access_log: bool,
    },

    /// Import entities from a JSONL file
    Import {
        /// Path to the JSONL file to import
        #[arg(long)]
        file: String,

        /// Entity type: clubs, teams, players, seasons, matches, lineups,
        /// stat_types, stats, kick_details, lineout_details
        #[arg(long)]
        entity: String,
    },

    /// Print a player's season summary
    PlayerSummary {
        /// Player ID
        #[arg(long)]
        player: i64,

        /// Requesting club ID
        #[arg(long)]
        club: i64,
    },

    /// Print a match's stat bars
    MatchStats {
        /// Public match identifier (ULID)
        #[arg(long)]
        ulid: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing. --access-log pulls tower-http's request traces in.
    let access_log = matches!(
        cli.command,
        Commands::Serve {
            access_log: true,
            ..
        }
    );
    let default_filter = if access_log {
        format!("{},tower_http=debug", cli.log_level)
    } else {
        cli.log_level.clone()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting rugby-stats v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config from {:?}", config_path))?;

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);

    match cli.command {
        Commands::Serve { host, port, .. } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = rugby_stats::api::state::AppState {
                store: Arc::new(ClubStore::new(storage)),
            };
            let app = rugby_stats::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Import { file, entity } => {
            let Some(entity) = EntityType::parse(&entity) else {
                anyhow::bail!("Unknown entity type: {}", entity);
            };

            let count = match entity {
                EntityType::Club => import_file::<Club>(&storage, entity, &file)?,
                EntityType::Team => import_file::<Team>(&storage, entity, &file)?,
                EntityType::Player => import_file::<Player>(&storage, entity, &file)?,
                EntityType::Season => import_file::<Season>(&storage, entity, &file)?,
                EntityType::Match => import_file::<Match>(&storage, entity, &file)?,
                EntityType::Lineup => import_file::<Lineup>(&storage, entity, &file)?,
                EntityType::StatType => import_file::<StatType>(&storage, entity, &file)?,
                EntityType::StatRecord => import_file::<StatRecord>(&storage, entity, &file)?,
                EntityType::KickDetail => import_file::<KickDetail>(&storage, entity, &file)?,
                EntityType::LineoutDetail => {
                    import_file::<LineoutDetail>(&storage, entity, &file)?
                }
            };
            println!("Imported {} records into {}", count, entity.filename());
        }
        Commands::PlayerSummary { player, club } => {
            let store = ClubStore::new(storage);
            let summary = views::player_summary(&store, club, player)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::MatchStats { ulid } => {
            let ulid: MatchUlid = ulid
                .parse()
                .with_context(|| "invalid match identifier".to_string())?;
            let store = ClubStore::new(storage);
            let bars = views::match_stat_bars(&store, &ulid)?;
            println!("{}", serde_json::to_string_pretty(&bars)?);
        }
    }

    Ok(())
}

/// Validate every line of a JSONL file against the entity schema, then
/// append the batch. A single malformed line rejects the whole file.
fn import_file<T: DeserializeOwned + Serialize>(
    storage: &StorageConfig,
    entity: EntityType,
    path: &str,
) -> Result<usize> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;

    let mut rows: Vec<T> = Vec::new();
    for (num, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: T = serde_json::from_str(line)
            .with_context(|| format!("{}:{}", path, num + 1))?;
        rows.push(row);
    }

    let count = JsonlWriter::<T>::for_entity(storage, entity).append_batch(&rows)?;
    Ok(count)
}
