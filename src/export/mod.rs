// Export module.
// Reads the snapshot, sorts and reshapes the records, and writes the timestamped spreadsheet.

pub mod naming;
pub mod rows;
pub mod xlsx;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::cache::read_users;
use crate::error::{AppError, Result, WriteError};

use naming::export_file_name;
use rows::build_table;

/// Export the snapshot at `snapshot_path` into `output_dir`, named after the current time.
///
/// Returns the full path of the saved spreadsheet.
pub fn export_users(snapshot_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    export_users_at(snapshot_path, output_dir, &Local::now())
}

/// Same as [`export_users`] with an explicit export moment.
pub fn export_users_at(
    snapshot_path: &Path,
    output_dir: &Path,
    at: &DateTime<Local>,
) -> Result<PathBuf> {
    let result = write_export(snapshot_path, output_dir, at);

    match &result {
        Ok(path) => tracing::info!(path = %path.display(), "Spreadsheet saved"),
        Err(e) => tracing::error!(error = %e, "Export failed"),
    }

    result
}

fn write_export(
    snapshot_path: &Path,
    output_dir: &Path,
    at: &DateTime<Local>,
) -> Result<PathBuf> {
    let users = read_users(snapshot_path)?;
    let rows = build_table(users);
    tracing::debug!(rows = rows.len(), "Built export rows");

    if !output_dir.is_dir() {
        return Err(AppError::Write(WriteError::MissingFolder(
            output_dir.to_path_buf(),
        )));
    }

    let path = output_dir.join(export_file_name(at));
    xlsx::write_workbook(&path, &rows)?;
    Ok(path)
}
