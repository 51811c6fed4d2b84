//! Account routes: open an account and read its balance.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use coffer_core::AccountSnapshot;
use serde::Deserialize;
use tracing::{info, warn};

use super::AmountInput;
use crate::{
    AppState,
    error::ApiError,
    extract::{JsonBody, PathParam},
};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/{account_id}", get(get_account))
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Caller-chosen account number.
    pub account_id: i64,
    /// Opening balance.
    pub initial_balance: AmountInput,
}

/// POST /accounts - Open an account.
async fn create_account(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let initial_balance = payload.initial_balance.into_text();

    state
        .accounts
        .create_account(payload.account_id, &initial_balance, state.deadline())
        .await
        .map_err(|e| {
            warn!(account_id = payload.account_id, error = %e, "Failed to create account");
            ApiError::from(e)
        })?;

    info!(account_id = payload.account_id, "Account opened");
    Ok(StatusCode::CREATED)
}

/// GET /accounts/{account_id} - Read an account balance.
async fn get_account(
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i64>,
) -> Result<Json<AccountSnapshot>, ApiError> {
    let snapshot = state
        .accounts
        .get_account(account_id, state.deadline())
        .await?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use coffer_db::entities::accounts;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

    use crate::routes::test_support::{app, send};

    #[tokio::test]
    async fn test_create_account_returns_created() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<accounts::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let (status, body) = send(
            app(db),
            "POST",
            "/accounts",
            Some(r#"{"account_id": 1, "initial_balance": "100.00"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_create_existing_account_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![accounts::Model {
                id: 1,
                account_id: 1,
                balance: dec!(100.00),
            }]])
            .into_connection();

        let (status, body) = send(
            app(db),
            "POST",
            "/accounts",
            Some(r#"{"account_id": 1, "initial_balance": 5}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "ACCOUNT_ALREADY_EXISTS");
    }

    #[rstest]
    #[case::zero_id(r#"{"account_id": 0, "initial_balance": "100"}"#, "INVALID_ACCOUNT_ID")]
    #[case::zero_balance(r#"{"account_id": 1, "initial_balance": "0"}"#, "INVALID_AMOUNT")]
    #[case::text_balance(r#"{"account_id": 1, "initial_balance": "lots"}"#, "INVALID_AMOUNT")]
    #[case::oversized_balance(r#"{"account_id": 1, "initial_balance": "100000000000000000"}"#, "INVALID_AMOUNT")]
    #[case::malformed_json(r#"{"account_id": 1,"#, "VALIDATION_ERROR")]
    #[case::missing_field(r#"{"account_id": 1}"#, "VALIDATION_ERROR")]
    #[tokio::test]
    async fn test_create_account_bad_input(#[case] body: &str, #[case] code: &str) {
        let (status, json) = send(
            app(DatabaseConnection::Disconnected),
            "POST",
            "/accounts",
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], code);
    }

    #[tokio::test]
    async fn test_get_account_renders_balance() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![accounts::Model {
                id: 3,
                account_id: 1,
                balance: dec!(60),
            }]])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/accounts/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["account_id"], 1);
        assert_eq!(body["balance"], "60.00");
    }

    #[tokio::test]
    async fn test_get_missing_account() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<accounts::Model>::new()])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/accounts/9", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "ACCOUNT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_account_non_numeric_id() {
        let (status, body) = send(
            app(DatabaseConnection::Disconnected),
            "GET",
            "/accounts/abc",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_store_failure_hides_detail() {
        let (status, body) = send(
            app(DatabaseConnection::Disconnected),
            "GET",
            "/accounts/1",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "STORE_ERROR");
        assert_eq!(body["message"], "An error occurred");
    }
}
