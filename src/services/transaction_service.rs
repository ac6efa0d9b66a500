//! Transaction service - Core business logic for registering transactions.
//!
//! This service handles:
//! - Balance validation (amount plus the type's fee)
//! - Debiting the account
//! - Persisting the transaction and the updated account
//!
//! # Write ordering
//!
//! The transaction is saved first, then the account. The two writes go to
//! separate stores and are not atomic: if the account write fails, the
//! transaction row stays and the balance is not debited. Callers receive the
//! account-store error unchanged.
//!
//! # Concurrency
//!
//! Registrations against the same account are serialized by a per-account
//! lock held for the whole read-validate-write sequence. The lock lives in
//! this process only; separate processes sharing one database are not
//! coordinated.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError},
};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::{
        account::Account,
        transaction::{Transaction, TransactionRequest},
    },
    store::{AccountStore, TransactionStore},
};

/// Per-account async locks, created on first use and removed once no
/// caller holds or waits on them.
#[derive(Debug, Default)]
struct AccountLocks {
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    fn map(&self) -> MutexGuard<'_, HashMap<String, Arc<Mutex<()>>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for exclusive access to `account_id`.
    async fn acquire(&self, account_id: &str) -> AccountGuard<'_> {
        let lock = self
            .map()
            .entry(account_id.to_string())
            .or_default()
            .clone();
        let guard = lock.clone().lock_owned().await;

        AccountGuard {
            locks: self,
            account_id: account_id.to_string(),
            lock,
            guard: Some(guard),
        }
    }
}

/// Held for the duration of one registration. On drop, including when the
/// registering future is cancelled, the map entry is removed if unused.
struct AccountGuard<'a> {
    locks: &'a AccountLocks,
    account_id: String,
    lock: Arc<Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for AccountGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut map = self.locks.map();
        // Only the map and this guard reference the lock
        if Arc::strong_count(&self.lock) == 2 {
            map.remove(&self.account_id);
        }
    }
}

/// Registers transactions and answers balance queries.
pub struct TransactionService {
    accounts: Arc<dyn AccountStore>,
    transactions: Arc<dyn TransactionStore>,
    locks: AccountLocks,
}

impl TransactionService {
    pub fn new(accounts: Arc<dyn AccountStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            accounts,
            transactions,
            locks: AccountLocks::default(),
        }
    }

    /// Register a transaction against an account.
    ///
    /// # Process
    ///
    /// 1. Validate the request
    /// 2. Load the account
    /// 3. Check `amount + fee <= balance`
    /// 4. Save the transaction
    /// 5. Debit the balance and save the account
    ///
    /// # Returns
    ///
    /// The saved transaction, with its assigned id
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: empty account id, negative or non-finite amount
    /// - `AccountNotFound`: no account with this id
    /// - `InsufficientFunds`: `amount + fee` exceeds the balance; nothing is written
    /// - `Database`: a store failed; later writes are skipped
    #[tracing::instrument(
        skip(self, request),
        fields(transaction_type = %request.transaction_type, amount = request.amount)
    )]
    pub async fn register_transaction(
        &self,
        account_id: &str,
        request: TransactionRequest,
    ) -> AppResult<Transaction> {
        validate_request(account_id, &request)?;

        let _guard = self.locks.acquire(account_id).await;

        let mut account = self.find_account(account_id).await?;

        let transaction = Transaction::new(account_id, &request);
        let total = transaction.total_debit();

        if total > account.balance {
            tracing::warn!(
                balance = account.balance,
                total,
                "rejecting transaction: insufficient funds"
            );
            return Err(AppError::InsufficientFunds);
        }

        let saved = self.transactions.save(transaction).await?;

        account.balance -= total;
        account.transactions.push(saved.clone());
        let account = self.accounts.save(account).await?;

        tracing::info!(
            transaction_id = saved.id.as_deref().unwrap_or_default(),
            fee = saved.fee,
            new_balance = account.balance,
            "transaction registered"
        );

        Ok(saved)
    }

    /// Current balance of an account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this id
    #[tracing::instrument(skip(self))]
    pub async fn get_global_balance(&self, account_id: &str) -> AppResult<f64> {
        let account = self.find_account(account_id).await?;
        Ok(account.balance)
    }

    /// Transactions of an account, oldest first.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this id
    #[tracing::instrument(skip(self))]
    pub async fn list_transactions(&self, account_id: &str) -> AppResult<Vec<Transaction>> {
        self.find_account(account_id).await?;
        self.transactions.find_by_account_id(account_id).await
    }

    async fn find_account(&self, account_id: &str) -> AppResult<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }
}

fn validate_request(account_id: &str, request: &TransactionRequest) -> AppResult<()> {
    if account_id.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Account ID must not be empty".to_string(),
        ));
    }

    if !request.amount.is_finite() || request.amount < 0.0 {
        return Err(AppError::InvalidRequest(
            "Amount must be zero or positive".to_string(),
        ));
    }

    Ok(())
}
