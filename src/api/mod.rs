// Remote user API module.
// Provides the fetch seam, the reqwest-backed client and the user record types.

pub mod client;
pub mod types;

pub use client::{Fetch, UsersClient};
pub use types::User;
