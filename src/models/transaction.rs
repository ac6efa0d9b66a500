//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionType`: the closed set of transaction kinds and their fees
//! - `Transaction`: a persisted debit against one account
//! - `TransactionRequest`: request body for registering a transaction
//! - `TransactionResponse`: response body returned to clients

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of transaction. Each variant carries a fixed fee.
///
/// Stored and serialized as its SCREAMING_SNAKE_CASE name, e.g. `WITHDRAW_ATM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    WithdrawAtm,
    AtmDeposit,
    BranchDeposit,
    DepositToOtherAccount,
    PhysicalPurchase,
    OnlinePurchase,
}

impl TransactionType {
    /// Every variant, in declaration order.
    pub const ALL: [TransactionType; 6] = [
        TransactionType::WithdrawAtm,
        TransactionType::AtmDeposit,
        TransactionType::BranchDeposit,
        TransactionType::DepositToOtherAccount,
        TransactionType::PhysicalPurchase,
        TransactionType::OnlinePurchase,
    ];

    /// Fee charged on top of the amount.
    pub const fn fee(self) -> f64 {
        match self {
            TransactionType::WithdrawAtm => 0.0,
            TransactionType::AtmDeposit => 2.0,
            TransactionType::BranchDeposit => 0.0,
            TransactionType::DepositToOtherAccount => 1.5,
            TransactionType::PhysicalPurchase => 0.0,
            TransactionType::OnlinePurchase => 5.0,
        }
    }

    /// Name used in the `transaction_type` column and in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            TransactionType::WithdrawAtm => "WITHDRAW_ATM",
            TransactionType::AtmDeposit => "ATM_DEPOSIT",
            TransactionType::BranchDeposit => "BRANCH_DEPOSIT",
            TransactionType::DepositToOtherAccount => "DEPOSIT_TO_OTHER_ACCOUNT",
            TransactionType::PhysicalPurchase => "PHYSICAL_PURCHASE",
            TransactionType::OnlinePurchase => "ONLINE_PURCHASE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored `transaction_type` value is not a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTransactionType(s.to_string()))
    }
}

impl TryFrom<String> for TransactionType {
    type Error = UnknownTransactionType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Represents a transaction record.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Is written once and never updated
/// - Belongs to exactly one account (`account_id`)
/// - Stores the fee that applied at the time of registration
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier, `None` until the transaction store assigns one
    pub id: Option<String>,

    #[sqlx(try_from = "String")]
    pub transaction_type: TransactionType,

    /// Debited amount, excluding the fee
    pub amount: f64,

    /// Fee derived from `transaction_type`
    pub fee: f64,

    #[sqlx(rename = "occurred_at")]
    pub timestamp: DateTime<Utc>,

    pub description: String,

    /// Owning account
    pub account_id: String,
}

impl Transaction {
    /// Build an unsaved transaction against `account_id`, stamped now.
    pub fn new(account_id: &str, request: &TransactionRequest) -> Self {
        Self {
            id: None,
            transaction_type: request.transaction_type,
            amount: request.amount,
            fee: request.transaction_type.fee(),
            timestamp: Utc::now(),
            description: request.description.clone(),
            account_id: account_id.to_string(),
        }
    }

    /// Total taken from the balance: amount plus fee.
    pub fn total_debit(&self) -> f64 {
        self.amount + self.fee
    }
}

/// Request to register a transaction against an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_type": "WITHDRAW_ATM",
///   "amount": 1000.0,
///   "description": "ATM Withdrawal"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub transaction_type: TransactionType,

    /// Must be >= 0
    pub amount: f64,

    #[serde(default)]
    pub description: String,
}

/// Response returned for transaction operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "transaction_type": "WITHDRAW_ATM",
///   "amount": 1000.0,
///   "fee": 0.0,
///   "timestamp": "2025-12-21T16:00:00Z",
///   "description": "ATM Withdrawal",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub fee: f64,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub account_id: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id.unwrap_or_default(),
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            fee: transaction.fee,
            timestamp: transaction.timestamp,
            description: transaction.description,
            account_id: transaction.account_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fees_are_static() {
        assert_eq!(TransactionType::WithdrawAtm.fee(), 0.0);
        assert_eq!(TransactionType::AtmDeposit.fee(), 2.0);
        assert_eq!(TransactionType::DepositToOtherAccount.fee(), 1.5);
        assert_eq!(TransactionType::OnlinePurchase.fee(), 5.0);
        assert!(TransactionType::ALL.iter().all(|t| t.fee() >= 0.0));
    }

    #[test]
    fn column_name_matches_serde_name() {
        for t in TransactionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(t.as_str().parse::<TransactionType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = "WIRE".parse::<TransactionType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown transaction type: WIRE");
    }

    #[test]
    fn new_transaction_takes_fee_from_type() {
        let request = TransactionRequest {
            transaction_type: TransactionType::OnlinePurchase,
            amount: 20.0,
            description: "Book".to_string(),
        };

        let transaction = Transaction::new("acc-1", &request);

        assert!(transaction.id.is_none());
        assert_eq!(transaction.fee, 5.0);
        assert_eq!(transaction.total_debit(), 25.0);
        assert_eq!(transaction.account_id, "acc-1");
        assert_eq!(transaction.description, "Book");
    }
}
