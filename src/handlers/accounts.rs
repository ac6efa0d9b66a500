//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/{id} - Get account with its transactions
//! - GET /api/v1/accounts/{id}/balance - Get the account's global balance

use crate::{
    error::AppError,
    models::account::{AccountResponse, BalanceResponse, CreateAccountRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "1000008",
///   "owner_name": "John Doe",
///   "initial_balance": 5000.0
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Blank fields or negative balance
/// - **Error (409)**: Account number already in use
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let account = state.accounts.create_account(request).await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Account details, transactions oldest first
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.accounts.get_account(&account_id).await?;

    Ok(Json(account.into()))
}

/// Get the global balance of an account.
///
/// # Response (200)
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "balance": 5000.0
/// }
/// ```
pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = state.transactions.get_global_balance(&account_id).await?;

    Ok(Json(BalanceResponse {
        account_id,
        balance,
    }))
}
