//! Transfer routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};

use super::AmountInput;
use crate::{AppState, error::ApiError, extract::JsonBody};

/// Acknowledgement text returned for a committed transfer.
pub const TRANSFER_COMPLETED: &str = "Transaction Successfully completed";

/// Creates the transfer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", post(create_transaction))
}

/// Request body for a transfer.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Account to debit.
    pub source_account_id: i64,
    /// Account to credit.
    pub destination_account_id: i64,
    /// Amount to move.
    pub amount: AmountInput,
}

/// Response for a committed transfer.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Fixed acknowledgement text.
    pub response: &'static str,
}

/// POST /transactions - Move funds between two accounts.
async fn create_transaction(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let amount = payload.amount.into_text();

    state
        .transfers
        .create_transfer(
            payload.source_account_id,
            payload.destination_account_id,
            &amount,
            state.deadline(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse {
            response: TRANSFER_COMPLETED,
        }),
    ))
}
