// Users API response types.
// Only the fields the export needs are modelled; anything else in the payload is ignored.

use serde::Deserialize;

/// Postal address nested in a user record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

/// A user as served by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Full name in "first last" form.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
}

impl User {
    /// First whitespace-separated token of the name.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// Last whitespace-separated token of the name. Middle tokens are dropped.
    pub fn last_name(&self) -> Option<&str> {
        self.name.split_whitespace().next_back()
    }
}
