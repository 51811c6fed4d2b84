//! Account ledger rules.
//!
//! This module implements the pure side of the ledger:
//! - Domain types for account creation, lookup and transfers
//! - Input validation (ids, amounts, self-transfers)
//! - The error taxonomy shared by every ledger operation

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::{ErrorKind, LedgerError};
pub use types::{AccountSnapshot, NewAccount, TransferRequest};
pub use validation::{
    AMOUNT_LIMIT, MIN_AMOUNT, parse_amount, validate_account_id, validate_new_account,
    validate_transfer,
};
