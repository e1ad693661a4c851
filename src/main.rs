//! employee-export: fetch the user list once, then write it to a sorted spreadsheet.
//!
//! # Usage
//!
//! ```bash
//! # Cache users (if needed) and export to ./files
//! employee-export
//!
//! # Custom endpoint and folders
//! employee-export --url http://localhost:8080/users --data-dir ./data --output-dir ./out
//! ```

mod api;
mod cache;
mod config;
mod error;
mod export;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use crate::api::UsersClient;
use crate::cache::CacheOutcome;
use crate::config::{Config, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "employee-export")]
#[command(version, about = "Export cached user records to a sorted spreadsheet")]
struct Cli {
    /// Endpoint returning the JSON user list
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_API_URL)]
    url: String,

    /// Folder holding the cached users.json (defaults to the platform cache dir)
    #[arg(long, env = "USERS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Existing folder the spreadsheet is written into
    #[arg(long, env = "EXPORT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "USERS_API_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Config::default();
        Self {
            endpoint_url: cli.url,
            data_dir: cli.data_dir.unwrap_or(defaults.data_dir),
            output_dir: cli.output_dir,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}

/// Ensure the snapshot, then export. A cache failure stops the run before export.
async fn run(config: &Config) -> Result<PathBuf> {
    let client = UsersClient::new(config.timeout)
        .inspect_err(|e| tracing::error!(error = %e, "Failed to build HTTP client"))?;
    if let CacheOutcome::Fetched { bytes } = cache::ensure_cache(config, &client).await? {
        tracing::debug!(bytes, "Exporting freshly fetched snapshot");
    }
    export::export_users(&config.snapshot_path(), &config.output_dir)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::setup_tracing();

    let config = Config::from(Cli::parse());
    tracing::debug!(?config, "Starting export");

    // Each step logs its own failure; only the exit status is left to report.
    match run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
