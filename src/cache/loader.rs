// Cache loader.
// Ensures the snapshot exists, fetching it from the remote endpoint only when absent.
//
// Concurrent runs may each fetch; the first snapshot to land is kept and never replaced.

use crate::api::Fetch;
use crate::config::Config;
use crate::error::FetchError;

use super::store::{self, Stored};

/// Which path `ensure_cache` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The snapshot was already on disk; nothing was fetched.
    AlreadyCached,
    /// The snapshot was fetched and written.
    Fetched { bytes: usize },
}

/// Make sure the snapshot file exists.
///
/// An existing file is trusted as-is: its content and age are never checked.
/// Otherwise one request is made and the body is stored verbatim. If another run
/// created the snapshot while this one was fetching, that file wins and the
/// outcome is [`CacheOutcome::AlreadyCached`]. On failure nothing is written.
pub async fn ensure_cache<F: Fetch>(
    config: &Config,
    fetcher: &F,
) -> Result<CacheOutcome, FetchError> {
    let path = config.snapshot_path();

    if store::exists(&path) {
        tracing::info!(path = %path.display(), "Snapshot already exists, skipping API call");
        return Ok(CacheOutcome::AlreadyCached);
    }

    let result = match fetcher.fetch(&config.endpoint_url).await {
        Ok(body) => store::write_bytes(&path, &body)
            .map(|stored| (stored, body.len()))
            .map_err(FetchError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok((Stored::Written, bytes)) => {
            tracing::info!(path = %path.display(), bytes, "Snapshot created");
            Ok(CacheOutcome::Fetched { bytes })
        }
        Ok((Stored::AlreadyPresent, _)) => {
            tracing::info!(path = %path.display(), "Snapshot appeared during fetch, keeping it");
            Ok(CacheOutcome::AlreadyCached)
        }
        Err(e) => {
            tracing::error!(
                url = %config.endpoint_url,
                path = %path.display(),
                error = %e,
                "Failed to populate snapshot"
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use reqwest::StatusCode;
    use tempfile::TempDir;

    /// Fetch double that counts calls and replies with a fixed body or a 500.
    struct StubFetcher {
        body: Option<Vec<u8>>,
        calls: AtomicUsize,
        /// File created mid-request, standing in for a concurrent run.
        competing_write: Option<(PathBuf, &'static str)>,
    }

    impl StubFetcher {
        fn ok(body: &[u8]) -> Self {
            Self {
                body: Some(body.to_vec()),
                calls: AtomicUsize::new(0),
                competing_write: None,
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: AtomicUsize::new(0),
                competing_write: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some((path, contents)) = &self.competing_write {
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, contents).unwrap();
            }
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(FetchError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    url: url.to_string(),
                }),
            }
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        Config {
            endpoint_url: "http://example.invalid/users".to_string(),
            data_dir: dir.path().join("data"),
            output_dir: dir.path().join("files"),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_second_call_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let fetcher = StubFetcher::ok(b"[]");

        let first = ensure_cache(&config, &fetcher).await.unwrap();
        assert_eq!(first, CacheOutcome::Fetched { bytes: 2 });
        let before = fs::read(config.snapshot_path()).unwrap();

        let second = ensure_cache(&config, &fetcher).await.unwrap();
        assert_eq!(second, CacheOutcome::AlreadyCached);
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(fs::read(config.snapshot_path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_body_stored_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let body = b"[\n  {\"name\": \"Jane Doe\"}\n]";

        ensure_cache(&config, &StubFetcher::ok(body)).await.unwrap();

        assert_eq!(fs::read(config.snapshot_path()).unwrap(), body);
    }

    #[tokio::test]
    async fn test_existing_file_trusted_without_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.snapshot_path(), "stale and not even json").unwrap();

        let fetcher = StubFetcher::failing();
        let outcome = ensure_cache(&config, &fetcher).await.unwrap();

        assert_eq!(outcome, CacheOutcome::AlreadyCached);
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(
            fs::read_to_string(config.snapshot_path()).unwrap(),
            "stale and not even json"
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let fetcher = StubFetcher::failing();

        let err = ensure_cache(&config, &fetcher).await.unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(fetcher.calls(), 1);
        assert!(!config.snapshot_path().exists());
    }

    #[tokio::test]
    async fn test_snapshot_created_during_fetch_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let mut fetcher = StubFetcher::ok(b"[\"late\"]");
        fetcher.competing_write = Some((config.snapshot_path(), "[\"early\"]"));

        let outcome = ensure_cache(&config, &fetcher).await.unwrap();

        assert_eq!(outcome, CacheOutcome::AlreadyCached);
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(
            fs::read_to_string(config.snapshot_path()).unwrap(),
            "[\"early\"]"
        );
        assert_eq!(fs::read_dir(&config.data_dir).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_unwritable_data_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(&temp_dir);
        // A regular file where the data folder should be.
        fs::write(temp_dir.path().join("blocked"), "").unwrap();
        config.data_dir = temp_dir.path().join("blocked");

        let err = ensure_cache(&config, &StubFetcher::ok(b"[]"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Io(_)));
    }
}
