//! Wire DTOs for the JSONPlaceholder API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user as served by `https://jsonplaceholder.typicode.com/users`.
///
/// Only `id` and `name` are interpreted locally; everything else the
/// endpoint returns (username, email, address, company, ...) is kept
/// verbatim in `extra` so the detail page's structured dump is lossless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
