//! API route definitions.

use axum::Router;
use serde::Deserialize;

use crate::AppState;

pub mod accounts;
pub mod health;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(transactions::routes())
}

/// Amount as sent by clients: decimal text, or a bare JSON number.
///
/// Either way the ledger receives the text and does its own parsing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// `"40.00"`
    Text(String),
    /// `40.00`
    Number(serde_json::Number),
}

impl AmountInput {
    /// The amount as decimal text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}
