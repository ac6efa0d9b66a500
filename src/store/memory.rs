//! In-memory stores backed by `HashMap`s behind `tokio::sync::RwLock`.
//!
//! Accounts are stored whole, including their `transactions` list.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountStore, TransactionStore, new_id};
use crate::{
    error::{AppError, AppResult},
    models::{account::Account, transaction::Transaction},
};

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn save(&self, mut account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;

        let id = account.id.get_or_insert_with(new_id).clone();

        // Same constraint as the UNIQUE column in postgres
        let taken = accounts
            .values()
            .any(|other| other.account_number == account.account_number && other.id_str() != id);
        if taken {
            return Err(AppError::DuplicateAccountNumber(account.account_number));
        }

        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn exists_by_account_number(&self, account_number: &str) -> AppResult<bool> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .any(|account| account.account_number == account_number))
    }
}

/// Transactions in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions across all accounts.
    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn save(&self, mut transaction: Transaction) -> AppResult<Transaction> {
        transaction.id.get_or_insert_with(new_id);
        self.transactions.write().await.push(transaction.clone());
        Ok(transaction)
    }

    async fn find_by_account_id(&self, account_id: &str) -> AppResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }
}
