//! Ledger error types for validation, lookup, business-rule and storage failures.
//!
//! Every failure the core returns is a [`LedgerError`]. Callers pick a
//! response from [`LedgerError::kind`] (or the HTTP helpers) and never need
//! to inspect storage details: store failures only carry a static
//! description of the operation that failed.

use coffer_shared::AppError;
use thiserror::Error;

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input. Never retried.
    Validation,
    /// A referenced account does not exist.
    NotFound,
    /// The account being created already exists.
    AlreadyExists,
    /// The source account cannot cover the transfer.
    InsufficientFunds,
    /// The caller's deadline elapsed mid-operation.
    DeadlineExceeded,
    /// I/O or transaction failure in the store.
    Store,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Account id is zero or negative.
    #[error("Invalid account id {0}: must be a positive integer")]
    InvalidAccountId(i64),

    /// Transfer source account id is zero or negative.
    #[error("Invalid source account id {0}: must be a positive integer")]
    InvalidSourceAccount(i64),

    /// Transfer destination account id is zero or negative.
    #[error("Invalid destination account id {0}: must be a positive integer")]
    InvalidDestinationAccount(i64),

    /// Amount text is not a decimal of at least 1 and below 1e17 with at most two decimal places.
    #[error("Invalid {field} '{value}': must be a decimal number of at least 1 and below 1e17 with at most two decimal places")]
    InvalidAmount {
        /// Name of the offending input field.
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// Source and destination are the same account.
    #[error("Source and destination account must differ (both are {0})")]
    SameAccountTransfer(i64),

    // ========== Lookup Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    /// One or both legs of a transfer are missing.
    #[error("Source or destination account does not exist")]
    TransferAccountsMissing,

    // ========== Conflict Errors ==========
    /// Account already exists.
    #[error("Account {0} already exists")]
    AccountAlreadyExists(i64),

    // ========== Business Rule Errors ==========
    /// Source balance is lower than the requested amount.
    #[error("Insufficient funds in account {account_id}")]
    InsufficientFunds {
        /// The source account.
        account_id: i64,
    },

    // ========== Infrastructure Errors ==========
    /// The caller's deadline elapsed; any open transaction was rolled back.
    #[error("Deadline exceeded while {0}")]
    DeadlineExceeded(&'static str),

    /// Storage failure. Only names the operation; driver detail is logged where it happens.
    #[error("Storage failure while {0}")]
    Store(&'static str),
}

impl LedgerError {
    /// Returns the coarse error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAccountId(_)
            | Self::InvalidSourceAccount(_)
            | Self::InvalidDestinationAccount(_)
            | Self::InvalidAmount { .. }
            | Self::SameAccountTransfer(_) => ErrorKind::Validation,
            Self::AccountNotFound(_) | Self::TransferAccountsMissing => ErrorKind::NotFound,
            Self::AccountAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::DeadlineExceeded(_) => ErrorKind::DeadlineExceeded,
            Self::Store(_) => ErrorKind::Store,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
            Self::InvalidSourceAccount(_) => "INVALID_SOURCE_ACCOUNT",
            Self::InvalidDestinationAccount(_) => "INVALID_DESTINATION_ACCOUNT",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::SameAccountTransfer(_) => "SAME_ACCOUNT_TRANSFER",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::TransferAccountsMissing => "TRANSFER_ACCOUNTS_MISSING",
            Self::AccountAlreadyExists(_) => "ACCOUNT_ALREADY_EXISTS",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::DeadlineExceeded(_) => "DEADLINE_EXCEEDED",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::AlreadyExists => 409,
            ErrorKind::InsufficientFunds => 422,
            ErrorKind::DeadlineExceeded => 504,
            ErrorKind::Store => 500,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::Validation(err.to_string()),
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::AlreadyExists => Self::Conflict(err.to_string()),
            ErrorKind::InsufficientFunds => Self::BusinessRule(err.to_string()),
            ErrorKind::DeadlineExceeded => Self::Timeout(err.to_string()),
            ErrorKind::Store => Self::Database("An error occurred".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LedgerError::InvalidAccountId(0).kind(), ErrorKind::Validation);
        assert_eq!(LedgerError::SameAccountTransfer(3).kind(), ErrorKind::Validation);
        assert_eq!(LedgerError::AccountNotFound(9).kind(), ErrorKind::NotFound);
        assert_eq!(LedgerError::TransferAccountsMissing.kind(), ErrorKind::NotFound);
        assert_eq!(
            LedgerError::AccountAlreadyExists(1).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            LedgerError::InsufficientFunds { account_id: 1 }.kind(),
            ErrorKind::InsufficientFunds
        );
        assert_eq!(
            LedgerError::DeadlineExceeded("reading account").kind(),
            ErrorKind::DeadlineExceeded
        );
        assert_eq!(LedgerError::Store("reading account").kind(), ErrorKind::Store);
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::InvalidSourceAccount(-1).http_status_code(), 400);
        assert_eq!(LedgerError::AccountNotFound(1).http_status_code(), 404);
        assert_eq!(LedgerError::AccountAlreadyExists(1).http_status_code(), 409);
        assert_eq!(
            LedgerError::InsufficientFunds { account_id: 1 }.http_status_code(),
            422
        );
        assert_eq!(LedgerError::DeadlineExceeded("x").http_status_code(), 504);
        assert_eq!(LedgerError::Store("x").http_status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidAmount {
            field: "initial_balance",
            value: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid initial_balance '0': must be a decimal number of at least 1 and below 1e17 with at most two decimal places"
        );
        assert_eq!(
            LedgerError::TransferAccountsMissing.to_string(),
            "Source or destination account does not exist"
        );
        assert_eq!(
            LedgerError::Store("committing transfer").to_string(),
            "Storage failure while committing transfer"
        );
    }

    #[test]
    fn test_store_error_is_generic_at_boundary() {
        let app: AppError = LedgerError::Store("reading account").into();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "An error occurred");
    }

    #[test]
    fn test_conversion_preserves_status() {
        let cases = [
            LedgerError::InvalidAccountId(0),
            LedgerError::AccountNotFound(4),
            LedgerError::AccountAlreadyExists(4),
            LedgerError::InsufficientFunds { account_id: 4 },
            LedgerError::DeadlineExceeded("creating transfer"),
            LedgerError::Store("creating transfer"),
        ];
        for err in cases {
            let status = err.http_status_code();
            let app: AppError = err.into();
            assert_eq!(app.status_code(), status);
        }
    }
}
