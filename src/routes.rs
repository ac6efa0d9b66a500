//! HTTP router.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the application router.
///
/// All routes are public; there is no authentication layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route("/api/v1/accounts/{id}", get(handlers::accounts::get_account))
        .route(
            "/api/v1/accounts/{id}/balance",
            get(handlers::accounts::get_balance),
        )
        .route(
            "/api/v1/accounts/{id}/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        )
        // Request/response spans for every call
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
