//! Bank transaction service library.
//!
//! Registers fee-bearing transactions against accounts and answers balance
//! queries. The binary in `main.rs` serves these operations over HTTP.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
