//! PostgreSQL stores built on sqlx.
//!
//! Errors from the driver (connectivity, constraint violations) are returned
//! as `AppError::Database` without translation.

use async_trait::async_trait;

use super::{AccountStore, TransactionStore, new_id};
use crate::{
    db::DbPool,
    error::AppResult,
    models::{account::Account, transaction::Transaction},
};

const TRANSACTION_COLUMNS: &str =
    "id, transaction_type, amount, fee, occurred_at, description, account_id";

#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, account_number, owner_name, balance FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut account) = account else {
            return Ok(None);
        };

        account.transactions = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE account_id = $1 ORDER BY seq"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(account))
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        let id = account.id.clone().unwrap_or_else(new_id);

        let mut saved = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, account_number, owner_name, balance)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET account_number = EXCLUDED.account_number,
                owner_name = EXCLUDED.owner_name,
                balance = EXCLUDED.balance
            RETURNING id, account_number, owner_name, balance
            "#,
        )
        .bind(&id)
        .bind(&account.account_number)
        .bind(&account.owner_name)
        .bind(account.balance)
        .fetch_one(&self.pool)
        .await?;

        saved.transactions = account.transactions;
        Ok(saved)
    }

    async fn exists_by_account_number(&self, account_number: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE account_number = $1)")
                .bind(account_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn save(&self, transaction: Transaction) -> AppResult<Transaction> {
        let id = transaction.id.clone().unwrap_or_else(new_id);

        let saved = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            INSERT INTO transactions (
                id,
                transaction_type,
                amount,
                fee,
                occurred_at,
                description,
                account_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(transaction.transaction_type.as_str())
        .bind(transaction.amount)
        .bind(transaction.fee)
        .bind(transaction.timestamp)
        .bind(&transaction.description)
        .bind(&transaction.account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_account_id(&self, account_id: &str) -> AppResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE account_id = $1 ORDER BY seq"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }
}
