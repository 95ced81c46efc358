use clap::{Parser, Subcommand};
use tracing::{info, warn};

use aqi_scraper::collector::Collector;
use aqi_scraper::config::Config;
use aqi_scraper::constants;
use aqi_scraper::error::Result;
use aqi_scraper::export::Exporter;
use aqi_scraper::fetcher::WaqiClient;
use aqi_scraper::logging;
use aqi_scraper::store::HistoryStore;

#[derive(Parser)]
#[command(name = "aqi_scraper")]
#[command(about = "World Air Quality Index scraper and animated-map data exporter")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file (compiled defaults when absent)
    #[arg(long, default_value = constants::DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch current readings and merge them into the history store
    Ingest {
        /// Locations to query (comma-separated) instead of the configured list
        #[arg(long)]
        locations: Option<String>,
    },
    /// Rebuild the derived table consumed by the map renderer
    Export,
    /// Run ingest and export sequentially
    Run {
        /// Locations to query (comma-separated) instead of the configured list
        #[arg(long)]
        locations: Option<String>,
    },
}

fn parse_locations(config: &Config, override_list: Option<String>) -> Vec<String> {
    match override_list {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => config.locations.clone(),
    }
}

async fn run_ingest(config: &Config, locations: Vec<String>) -> Result<()> {
    if config.token.trim().is_empty() {
        warn!(
            "No WAQI token configured; set {} or `token` in the config file",
            constants::TOKEN_ENV_VAR
        );
    }

    println!("📡 Querying {} locations...", locations.len());
    let feed = WaqiClient::new(config.token.clone());
    let collector = Collector::new(Box::new(feed), locations);
    let batch = collector.collect().await;
    println!(
        "✅ Collected {} readings ({} fetch failures)",
        batch.records.len(),
        batch.failures.len()
    );

    let store = HistoryStore::new(&config.store_path);
    let outcome = store.merge(batch.records)?;
    if outcome.created {
        println!(
            "✅ Created history store {} with {} rows",
            config.store_path, outcome.total
        );
    } else {
        println!(
            "✅ Updated history store {}: {} rows added, {} total",
            config.store_path, outcome.added, outcome.total
        );
    }
    Ok(())
}

fn run_export(config: &Config) -> Result<()> {
    let store = HistoryStore::new(&config.store_path);
    let exporter = Exporter::new(&config.export_path);
    let rows = exporter.export(&store)?;
    println!("📊 Wrote {} rows to {}", rows, config.export_path);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    info!("Using store {} and export {}", config.store_path, config.export_path);

    match cli.command {
        Commands::Ingest { locations } => {
            let locations = parse_locations(&config, locations);
            run_ingest(&config, locations).await?;
        }
        Commands::Export => {
            run_export(&config)?;
        }
        Commands::Run { locations } => {
            let locations = parse_locations(&config, locations);
            run_ingest(&config, locations).await?;
            // A first run where every fetch failed has no store to project
            if HistoryStore::new(&config.store_path).exists() {
                run_export(&config)?;
            } else {
                println!("⚠️  No history store yet; skipping export");
            }
        }
    }
    Ok(())
}
