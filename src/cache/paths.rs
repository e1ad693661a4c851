// Cache path utilities.
// Resolves the data folder and the snapshot file inside it.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the cached snapshot.
pub const SNAPSHOT_FILE: &str = "users.json";

/// Fallback data folder when no platform cache directory can be resolved.
const FALLBACK_DATA_DIR: &str = "data";

/// Get the platform cache directory (~/.cache/employee-export on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "employee-export").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Data folder used when none is configured.
pub fn default_data_dir() -> PathBuf {
    cache_dir().unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Path to the snapshot file inside `data_dir`.
pub fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SNAPSHOT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path() {
        let p = snapshot_path(Path::new("data"));
        assert_eq!(p, PathBuf::from("data/users.json"));
    }

    #[test]
    fn test_default_data_dir_not_empty() {
        let dir = default_data_dir();
        assert!(!dir.as_os_str().is_empty());
        if let Some(cache) = cache_dir() {
            assert!(cache.ends_with("employee-export"));
        }
    }
}
