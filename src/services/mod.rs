//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They talk to storage only through the traits in `crate::store`.

pub mod account_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use transaction_service::TransactionService;
