//! residencia-core
//!
//! Shared domain types and storage key conventions. No storage or HTTP
//! dependency; this is the vocabulary the API and storage crates share.

pub mod approved;
pub mod error;
pub mod keys;
pub mod models;
