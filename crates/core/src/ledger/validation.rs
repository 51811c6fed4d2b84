//! Input validation for ledger operations.
//!
//! Everything here runs before the store is touched. A request that fails
//! validation never costs a round trip.

use coffer_shared::Money;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{NewAccount, TransferRequest};

/// Smallest accepted opening balance or transfer amount.
pub const MIN_AMOUNT: Decimal = Decimal::ONE;

/// Exclusive upper bound on amounts: 10^17, the first value a `NUMERIC(19,2)` column cannot hold.
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(1_569_325_056, 23_283_064, 0, false, 0);

/// Checks that an account id is a positive integer.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAccountId` for ids below 1.
pub fn validate_account_id(account_id: i64) -> Result<i64, LedgerError> {
    if account_id < 1 {
        return Err(LedgerError::InvalidAccountId(account_id));
    }
    Ok(account_id)
}

/// Parses amount text and enforces `1 <= amount < AMOUNT_LIMIT`.
///
/// Zero and fractions below one are rejected, as are more than two decimal
/// places and anything the balance column could not store.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` naming `field`.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Money, LedgerError> {
    let invalid = || LedgerError::InvalidAmount {
        field,
        value: text.to_string(),
    };

    let amount = Money::parse(text).map_err(|_| invalid())?;
    if amount.amount() < MIN_AMOUNT || amount.amount() >= AMOUNT_LIMIT {
        return Err(invalid());
    }
    Ok(amount)
}

/// Validates an account creation request.
///
/// # Errors
///
/// Returns a validation error if the id is not positive or the balance is
/// not a decimal `>= 1`.
pub fn validate_new_account(
    account_id: i64,
    initial_balance: &str,
) -> Result<NewAccount, LedgerError> {
    let account_id = validate_account_id(account_id)?;
    let initial_balance = parse_amount("initial_balance", initial_balance)?;

    Ok(NewAccount {
        account_id,
        initial_balance,
    })
}

/// Validates a transfer request.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. source id positive
/// 2. destination id positive
/// 3. amount parses and is `>= 1`
/// 4. source and destination differ
///
/// # Errors
///
/// Returns the validation error for the first failing check.
pub fn validate_transfer(
    source_account_id: i64,
    destination_account_id: i64,
    amount: &str,
) -> Result<TransferRequest, LedgerError> {
    if source_account_id < 1 {
        return Err(LedgerError::InvalidSourceAccount(source_account_id));
    }
    if destination_account_id < 1 {
        return Err(LedgerError::InvalidDestinationAccount(destination_account_id));
    }

    let amount = parse_amount("amount", amount)?;

    if source_account_id == destination_account_id {
        return Err(LedgerError::SameAccountTransfer(source_account_id));
    }

    Ok(TransferRequest {
        source_account_id,
        destination_account_id,
        amount,
    })
}
