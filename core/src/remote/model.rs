//! Remote record definitions
//!
//! These types mirror the records served by the remote API. Fields the API
//! sends but nothing here uses are ignored on decode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zipcode: String,
}

/// A remote user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

/// A remote post, authored by the user whose id is `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Resolve the author among `users`
    pub fn author<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.iter().find(|u| u.id == self.user_id)
    }
}

/// Decode a JSON array record-by-record, dropping records of the wrong shape
pub fn decode_records<T: DeserializeOwned>(values: Vec<serde_json::Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind, index, error = %e, "Dropping malformed remote record");
                None
            }
        })
        .collect()
}
