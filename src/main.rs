//! Command-line interface for nba-loadtest
//!
//! # Usage Examples
//!
//! ```bash
//! # Submit 10 random player stat records to a local API
//! nba-loadtest
//!
//! # Deterministic run against a non-default endpoint
//! nba-loadtest \
//!   --url http://localhost:9090/api/v1/statistics/player/stats \
//!   --count 100 \
//!   --seed 42
//!
//! # Inspect payloads without sending anything
//! nba-loadtest --dry-run --seed 42
//! ```

use clap::Parser;
use nba_loadtest::{run_submission_loop, RunOpts};
use stats_generator::StatsGenerator;

#[derive(Parser)]
#[command(name = "nba-loadtest")]
#[command(about = "Populates an NBA statistics API with synthetic player stats")]
#[command(long_about = None)]
struct Cli {
    /// Statistics API endpoint to POST player stats to
    #[arg(
        long,
        default_value = "http://localhost:8080/api/v1/statistics/player/stats"
    )]
    url: String,

    /// Number of stat records to generate and submit
    #[arg(long, default_value = "10")]
    count: u64,

    /// Random seed for deterministic generation (omit to seed from OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Dry-run mode: generate and log payloads without sending any requests
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => StatsGenerator::new(seed),
        None => StatsGenerator::from_entropy(),
    };

    if cli.dry_run {
        for _ in 0..cli.count {
            let record = generator.generate();
            let payload = serde_json::to_string_pretty(&record)?;
            tracing::info!("[DRY-RUN] Would insert stats: {payload}");
        }
        return Ok(());
    }

    tracing::info!(
        "Submitting {} player stat records to {}",
        cli.count,
        cli.url
    );

    let client = reqwest::Client::new();
    let opts = RunOpts {
        url: cli.url,
        count: cli.count,
    };

    run_submission_loop(&client, &opts, &mut generator).await?;

    Ok(())
}
