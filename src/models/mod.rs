//! Data models representing database entities and API payloads.

/// Bank account model
pub mod account;
/// Transaction model and fee table
pub mod transaction;
