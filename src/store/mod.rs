//! Persistence capabilities consumed by the services.
//!
//! Services only see the two traits below. `postgres` implements them with
//! sqlx, `memory` with process-local maps for tests and local runs.

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{account::Account, transaction::Transaction},
};

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryAccountStore, InMemoryTransactionStore};
pub use postgres::{PgAccountStore, PgTransactionStore};

/// Account persistence.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up an account and its transactions. `None` if no such id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// Insert or update an account. Assigns an id on first insert and
    /// returns the stored account. Transactions are persisted through
    /// `TransactionStore`; implementations may ignore `account.transactions`.
    async fn save(&self, account: Account) -> AppResult<Account>;

    async fn exists_by_account_number(&self, account_number: &str) -> AppResult<bool>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Append-only transaction persistence.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert a transaction, assigning an id if it has none.
    async fn save(&self, transaction: Transaction) -> AppResult<Transaction>;

    /// All transactions of one account, oldest first.
    async fn find_by_account_id(&self, account_id: &str) -> AppResult<Vec<Transaction>>;
}

/// Fresh identifier for a newly inserted row.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
