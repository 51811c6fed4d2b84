//! Ledger domain types for account creation, lookup and transfers.

use coffer_shared::Money;
use serde::Serialize;

/// A validated request to open an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAccount {
    /// Caller-supplied account number (always >= 1).
    pub account_id: i64,
    /// Opening balance (always >= 1).
    pub initial_balance: Money,
}

/// Point-in-time view of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountSnapshot {
    /// Caller-supplied account number.
    pub account_id: i64,
    /// Balance at the time of the read.
    pub balance: Money,
}

/// A validated request to move funds between two accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    /// Account to debit.
    pub source_account_id: i64,
    /// Account to credit.
    pub destination_account_id: i64,
    /// Amount to move (always >= 1).
    pub amount: Money,
}

impl TransferRequest {
    /// Both account ids in ascending order, the order rows are locked in.
    #[must_use]
    pub fn lock_order(&self) -> [i64; 2] {
        let (a, b) = (self.source_account_id, self.destination_account_id);
        if a <= b { [a, b] } else { [b, a] }
    }
}
