// Cache module for the local user snapshot.
// Fetches the remote list once and keeps it on disk; presence alone marks it valid.

pub mod loader;
pub mod paths;
pub mod store;

pub use loader::{CacheOutcome, ensure_cache};
pub use store::read_users;
