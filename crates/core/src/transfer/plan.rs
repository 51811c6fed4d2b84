//! Sufficiency check and the debit/credit plan for one transfer.

use coffer_shared::Money;
use rust_decimal::Decimal;

use crate::ledger::{AccountSnapshot, LedgerError, TransferRequest};

/// The balance changes a transfer will apply, computed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferPlan {
    /// Source account as read.
    pub source: AccountSnapshot,
    /// Destination account as read.
    pub destination: AccountSnapshot,
    /// Signed delta for the source (negative).
    pub debit: Decimal,
    /// Signed delta for the destination (positive).
    pub credit: Decimal,
}

impl TransferPlan {
    /// Source balance once the plan is applied.
    #[must_use]
    pub fn source_balance_after(&self) -> Money {
        Money::from_decimal(self.source.balance.amount() + self.debit)
    }

    /// Destination balance once the plan is applied.
    #[must_use]
    pub fn destination_balance_after(&self) -> Money {
        Money::from_decimal(self.destination.balance.amount() + self.credit)
    }
}

/// Checks that `balance` covers `amount`.
///
/// # Errors
///
/// Returns `LedgerError::InsufficientFunds` when `balance < amount`.
pub fn check_sufficiency(account_id: i64, balance: Money, amount: Money) -> Result<(), LedgerError> {
    if balance < amount {
        return Err(LedgerError::InsufficientFunds { account_id });
    }
    Ok(())
}

/// Builds the debit/credit plan from a batch read of both legs.
///
/// `accounts` may arrive in any order and may hold fewer rows than
/// requested; a missing leg is reported as `TransferAccountsMissing`.
///
/// # Errors
///
/// Returns `TransferAccountsMissing` if either account is absent, or
/// `InsufficientFunds` if the source cannot cover the amount.
pub fn plan_transfer(
    request: &TransferRequest,
    accounts: &[AccountSnapshot],
) -> Result<TransferPlan, LedgerError> {
    if accounts.len() < 2 {
        return Err(LedgerError::TransferAccountsMissing);
    }

    let find = |account_id: i64| {
        accounts
            .iter()
            .find(|a| a.account_id == account_id)
            .copied()
            .ok_or(LedgerError::TransferAccountsMissing)
    };
    let source = find(request.source_account_id)?;
    let destination = find(request.destination_account_id)?;

    check_sufficiency(source.account_id, source.balance, request.amount)?;

    Ok(TransferPlan {
        source,
        destination,
        debit: -request.amount.amount(),
        credit: request.amount.amount(),
    })
}
