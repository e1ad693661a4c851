// Export file naming.

use chrono::{DateTime, TimeZone};

/// Prefix of every exported spreadsheet.
pub const FILE_PREFIX: &str = "employees_";

/// Spreadsheet file extension.
pub const FILE_EXTENSION: &str = "xlsx";

/// `employees_YYYYMMDDHHMMSS.xlsx` for the given moment.
///
/// The fixed-width timestamp makes lexicographic order match chronological order.
/// Two exports within the same second get the same name.
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        at.format("%Y%m%d%H%M%S"),
        FILE_EXTENSION
    )
}
