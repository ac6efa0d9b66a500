//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::{
    services::{AccountService, TransactionService},
    store::{AccountStore, TransactionStore},
};

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub transactions: Arc<TransactionService>,
    /// Kept for health checks
    pub account_store: Arc<dyn AccountStore>,
}

impl AppState {
    /// Wire both services onto the given stores.
    pub fn new(account_store: Arc<dyn AccountStore>, transaction_store: Arc<dyn TransactionStore>) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(account_store.clone())),
            transactions: Arc::new(TransactionService::new(
                account_store.clone(),
                transaction_store,
            )),
            account_store,
        }
    }
}
