//! Networking modules for the JSONPlaceholder REST API.
//!
//! `api` issues the GET requests, `types` defines the wire schema.

pub mod api;
pub mod types;
