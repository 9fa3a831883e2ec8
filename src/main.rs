use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basket_analytics::api::routes::ranking::RankingResponse;
use basket_analytics::api::routes::stats::{AverageResponse, FieldsResponse};
use basket_analytics::api::{build_router, cors_layer, state::AppState};
use basket_analytics::calculate;
use basket_analytics::config::AppConfig;
use basket_analytics::ingest;
use basket_analytics::models::{PlayerTable, StatField};

#[derive(Parser)]
#[command(name = "basket-analytics")]
#[command(about = "Basketball player statistics: ratings, rankings and comparisons")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Player statistics spreadsheet (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

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
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a window of the rating ranking
    Rank {
        /// Ranks to skip
        #[arg(long, default_value = "0")]
        start: usize,

        /// Window size (default: dashboard top_n)
        #[arg(long)]
        size: Option<usize>,
    },

    /// Compare players by name
    Compare {
        /// Player names, in display order
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Average of a field over all players
    Average {
        /// Field key (e.g. "offense_score", "fg2_pct")
        field: String,
    },

    /// Scatter series for two fields
    Scatter {
        #[arg(long)]
        x: Option<String>,

        #[arg(long)]
        y: Option<String>,
    },

    /// Radar profile of one player
    Radar { name: String },

    /// Dashboard summary cards
    Summary,

    /// List available fields
    Fields,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

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

    tracing::info!("Starting basket-analytics v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Fields => {
            print_json(&FieldsResponse::catalogue())?;
        }
        Commands::Serve { host, port } => {
            let table = load_table(&config)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            serve(table, &config, &host, port).await?;
        }
        Commands::Rank { start, size } => {
            let table = load_table(&config)?;
            let size = size.unwrap_or(config.dashboard.top_n);
            print_json(&RankingResponse::build(&table, start, size))?;
        }
        Commands::Compare { names } => {
            let table = load_table(&config)?;
            let records = table.records();
            let selection =
                calculate::select_players(records, &names, config.dashboard.max_compare);
            let profiles: Vec<_> = selection
                .players
                .iter()
                .map(|&r| calculate::radar_profile(r))
                .collect();
            print_json(&profiles)?;
            if !selection.dropped.is_empty() {
                eprintln!(
                    "Only the first {} players are compared; ignored: {}",
                    config.dashboard.max_compare,
                    selection.dropped.join(", ")
                );
            }
        }
        Commands::Average { field } => {
            let table = load_table(&config)?;
            let field = StatField::parse(&field)
                .with_context(|| format!("Unknown field: {}", field))?;
            print_json(&AverageResponse::compute(table.records(), field)?)?;
        }
        Commands::Scatter { x, y } => {
            let table = load_table(&config)?;
            let records = table.records();
            let (default_x, default_y) = config.dashboard.scatter_axes()?;
            let x = parse_optional_field(x.as_deref())?.unwrap_or(default_x);
            let y = parse_optional_field(y.as_deref())?.unwrap_or(default_y);
            print_json(&calculate::scatter(records, x, y))?;
        }
        Commands::Radar { name } => {
            let table = load_table(&config)?;
            let record = table
                .find(&name)
                .with_context(|| format!("No player named '{}'", name))?;
            print_json(&calculate::radar_profile(record))?;
        }
        Commands::Summary => {
            let table = load_table(&config)?;
            print_json(&calculate::dashboard_summary(table.records()))?;
        }
    }

    Ok(())
}

fn load_table(config: &AppConfig) -> Result<PlayerTable> {
    ingest::load_table(&config.data_file)
        .with_context(|| format!("Failed to load players from {:?}", config.data_file))
}

async fn serve(table: PlayerTable, config: &AppConfig, host: &str, port: u16) -> Result<()> {
    let cors = cors_layer(&config.server.cors_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.server.cors_origin))?;
    let state = AppState::new(table, config.dashboard.clone());
    let app = build_router(state).layer(cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard API: http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_optional_field(key: Option<&str>) -> Result<Option<StatField>> {
    key.map(|k| StatField::parse(k).with_context(|| format!("Unknown field: {}", k)))
        .transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
