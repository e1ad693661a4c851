// Export row shaping.
// Sorts user records by (last name, first name) and maps each onto the fixed column layout.

use std::cmp::Ordering;

use crate::api::User;

/// Number of columns in every exported row.
pub const COLUMN_COUNT: usize = 8;

/// Header row labels, in column order.
pub const HEADER: [&str; COLUMN_COUNT] = [
    "last name",
    "first name",
    "email",
    "street",
    "city",
    "zipcode",
    "phone",
    "website",
];

/// One spreadsheet data row derived from a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub phone: String,
    pub website: String,
}

impl ExportRow {
    pub fn from_user(user: &User) -> Self {
        let (last, first) = sort_key(user);
        Self {
            last_name: last.to_string(),
            first_name: first.to_string(),
            email: user.email.clone(),
            street: user.address.street.clone(),
            city: user.address.city.clone(),
            zipcode: user.address.zipcode.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.last_name,
            &self.first_name,
            &self.email,
            &self.street,
            &self.city,
            &self.zipcode,
            &self.phone,
            &self.website,
        ]
    }
}

/// `(last, first)` name tokens. A name without tokens keys as empty strings.
fn sort_key(user: &User) -> (&str, &str) {
    (
        user.last_name().unwrap_or_default(),
        user.first_name().unwrap_or_default(),
    )
}

fn compare(a: &User, b: &User) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort ascending by last then first name, code-point order. Ties keep input order.
pub fn sort_users(users: &mut [User]) {
    users.sort_by(compare);
}

/// Sort `users` and shape them into export rows.
pub fn build_table(mut users: Vec<User>) -> Vec<ExportRow> {
    sort_users(&mut users);
    users.iter().map(ExportRow::from_user).collect()
}
