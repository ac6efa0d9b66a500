//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/accounts/{id}/transactions - Register a transaction
//! - GET /api/v1/accounts/{id}/transactions - List the account's transactions

use crate::{
    error::AppError,
    models::transaction::{TransactionRequest, TransactionResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Register a transaction against an account.
///
/// # Request Body
///
/// ```json
/// {
///   "transaction_type": "WITHDRAW_ATM",
///   "amount": 1000.0,
///   "description": "ATM Withdrawal"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The saved transaction, including its fee
/// - **Error (404)**: Account not found
/// - **Error (422)**: `amount + fee` exceeds the balance
pub async fn create_transaction(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(request): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let transaction = state
        .transactions
        .register_transaction(&account_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// List an account's transactions, oldest first.
pub async fn list_transactions(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = state.transactions.list_transactions(&account_id).await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}
