//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a bank account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients
//! - `BalanceResponse`: Response body for the balance query

use serde::{Deserialize, Serialize};

use crate::models::transaction::{Transaction, TransactionResponse};

/// Represents an account record.
///
/// # Database Table
///
/// Maps to the `accounts` table. `account_number` is unique across accounts
/// and the balance never drops below zero through a registered transaction.
///
/// `transactions` is not a column; stores fill it from the `transactions`
/// table, oldest first.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier, `None` until the account store assigns one
    pub id: Option<String>,

    /// Customer-facing account number
    pub account_number: String,

    pub owner_name: String,

    /// Current (global) balance
    pub balance: f64,

    #[sqlx(skip)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Build an unsaved account with no transactions.
    pub fn new(account_number: impl Into<String>, owner_name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: None,
            account_number: account_number.into(),
            owner_name: owner_name.into(),
            balance,
            transactions: Vec::new(),
        }
    }

    /// Assigned id, or an empty string for unsaved accounts.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_number": "1000008",
///   "owner_name": "John Doe",
///   "initial_balance": 5000.0
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub account_number: String,

    pub owner_name: String,

    /// Opening balance (defaults to 0 if not provided)
    #[serde(default)]
    pub initial_balance: f64,
}

/// Response body for account endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub account_number: String,
    pub owner_name: String,
    pub balance: f64,
    pub transactions: Vec<TransactionResponse>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.unwrap_or_default(),
            account_number: account.account_number,
            owner_name: account.owner_name,
            balance: account.balance,
            transactions: account.transactions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body for `GET /api/v1/accounts/{id}/balance`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub account_id: String,
    pub balance: f64,
}
