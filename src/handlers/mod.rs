//! HTTP request handlers (route handlers).
//!
//! Handlers only translate between HTTP and the services; all business
//! rules live in `crate::services`.

/// Account endpoints
pub mod accounts;
/// Liveness and storage connectivity
pub mod health;
/// Transaction endpoints
pub mod transactions;
