mod cache;
mod predict;
mod snapshot;
mod telemetry;
mod time;
mod web;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cache::{CacheError, TelemetryCache, TelemetryKind};
use crate::snapshot::{computed_snapshot, raw_snapshot, Telemetry};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "iss-o-mat")]
#[command(about = "ISS telemetry snapshots propagated to the current time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve snapshots over HTTP
    Serve {
        #[arg(short, long, default_value = "iss-o-mat.yaml")]
        config: String,
    },
    /// Print a time-corrected snapshot from a cache folder
    Compute {
        #[arg(short, long, default_value = "cache")]
        cache: PathBuf,
        /// Report the cached tracking angles instead of the reference look angle
        #[arg(long)]
        tracking: bool,
    },
    /// Print the cached telemetry without propagation
    Raw {
        #[arg(short, long, default_value = "cache")]
        cache: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Compute { cache, tracking } => compute(cache, tracking),
        Commands::Raw { cache } => raw(cache),
    }
}

async fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct CachedTelemetry {
    status: String,
    state_vector: String,
    tracking: Option<String>,
}

impl CachedTelemetry {
    fn load(cache: &TelemetryCache, tracking: bool) -> Result<Self, CacheError> {
        Ok(Self {
            status: cache.read(TelemetryKind::Status)?,
            state_vector: cache.read(TelemetryKind::StateVector)?,
            tracking: if tracking {
                cache.read_optional(TelemetryKind::Tracking)?
            } else {
                None
            },
        })
    }

    fn telemetry(&self) -> Telemetry<'_> {
        Telemetry {
            status: &self.status,
            state_vector: &self.state_vector,
            tracking: self.tracking.as_deref(),
        }
    }
}

fn compute(folder: PathBuf, tracking: bool) -> ExitCode {
    let cached = match CachedTelemetry::load(&TelemetryCache::new(folder), tracking) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading telemetry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_json(&computed_snapshot(&cached.telemetry(), &chrono::Local::now()))
}

fn raw(folder: PathBuf) -> ExitCode {
    let cached = match CachedTelemetry::load(&TelemetryCache::new(folder), false) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading telemetry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_json(&raw_snapshot(&cached.telemetry(), &chrono::Local::now()))
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
