//! `punch-planner` command line.
//!
//! `serve` runs the HTTP API; `calc` runs one calculation and prints it.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use punch_planner::api::{AppState, CalculationResponse, create_router};
use punch_planner::calculation::calculate_time_difference;
use punch_planner::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "punch-planner", version, about = "Shift punch-in/out times to a new arrival time")]
struct Args {
    /// Path to the planner configuration file.
    #[arg(long, global = true, default_value = "./config/planner.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// Override the configured bind address.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Calculate a single schedule shift.
    Calc {
        /// Usual punch-in time, e.g. "9:00 AM".
        #[arg(long)]
        start: String,
        /// Usual arrival time.
        #[arg(long)]
        original: String,
        /// Desired arrival time.
        #[arg(long = "new")]
        new_arrival: String,
        /// Usual punch-out time.
        #[arg(long)]
        end: Option<String>,
        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Serve { bind } => serve(args.config, bind).await,
        Command::Calc {
            start,
            original,
            new_arrival,
            end,
            json,
        } => calc(&start, &original, &new_arrival, end.as_deref(), json),
    }
}

async fn serve(config_path: PathBuf, bind: Option<String>) -> Result<()> {
    let loader = ConfigLoader::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let bind = bind.unwrap_or_else(|| loader.config().server.bind.clone());

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;

    info!(bind = %bind, "punch-planner listening");
    axum::serve(listener, router).await?;
    Ok(())
}

fn calc(start: &str, original: &str, new_arrival: &str, end: Option<&str>, json: bool) -> Result<()> {
    let result = calculate_time_difference(start, original, new_arrival, end);
    if let Some(error) = &result.error {
        bail!("{}", error);
    }

    let response = CalculationResponse::from(result);
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let result = &response.result;
    if let Some(punch_in) = &result.new_punch_in_time {
        println!("New punch-in:  {}", punch_in);
    }
    if let Some(summary) = &response.summary {
        println!("               {}", summary);
    }
    if let Some(punch_out) = &result.new_punch_out_time {
        println!("New punch-out: {}", punch_out);
    }
    if let Some(end_summary) = &response.end_summary {
        println!("               {}", end_summary);
    }
    if let Some(total) = result.total_difference {
        println!("Total shift:   {} minutes", total);
    }
    Ok(())
}
