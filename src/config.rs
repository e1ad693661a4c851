// Run configuration.
// Endpoint, folders and timeout passed explicitly into the loader and exporter.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::paths;

/// Remote endpoint serving the user list.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default request timeout: 60 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Folder the spreadsheet is written into when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "files";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL fetched when the snapshot is absent.
    pub endpoint_url: String,
    /// Folder holding the snapshot file.
    pub data_dir: PathBuf,
    /// Folder receiving the exported spreadsheet. Must already exist.
    pub output_dir: PathBuf,
    /// Upper bound on the single network request.
    pub timeout: Duration,
}

impl Config {
    /// Full path of the cached snapshot.
    pub fn snapshot_path(&self) -> PathBuf {
        paths::snapshot_path(&self.data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_API_URL.to_string(),
            data_dir: paths::default_data_dir(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
