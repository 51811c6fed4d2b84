//! Account ledger: owns account identity and balance.
//!
//! Balances are only mutated through [`AccountRepository::apply_delta`],
//! inside a transaction the caller controls.

use std::sync::Arc;

use coffer_core::ledger::{validate_new_account, AccountSnapshot, LedgerError};
use coffer_core::Deadline;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{debug, info};

use crate::entities::accounts;
use crate::store::{bounded, is_check_violation, is_unique_violation, store_failure, within};

/// Repository for account records.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: Arc<DatabaseConnection>,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Opens an account with an initial balance.
    ///
    /// Input is validated before storage is touched. An existing account,
    /// found by the pre-read or by a concurrent insert hitting the unique
    /// index, is reported as `AccountAlreadyExists`.
    pub async fn create_account(
        &self,
        account_id: i64,
        initial_balance: &str,
        deadline: Deadline,
    ) -> Result<(), LedgerError> {
        let account = validate_new_account(account_id, initial_balance)?;

        let existing = bounded(
            deadline,
            "checking for existing account",
            accounts::Entity::find()
                .filter(accounts::Column::AccountId.eq(account.account_id))
                .one(&*self.db),
        )
        .await?;
        if existing.is_some() {
            return Err(LedgerError::AccountAlreadyExists(account.account_id));
        }

        let model = accounts::ActiveModel {
            account_id: Set(account.account_id),
            balance: Set(account.initial_balance.amount()),
            ..Default::default()
        };

        within(deadline, "creating account", async {
            accounts::Entity::insert(model)
                .exec_without_returning(&*self.db)
                .await
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        LedgerError::AccountAlreadyExists(account.account_id)
                    } else {
                        store_failure("creating account", &err)
                    }
                })
        })
        .await?;

        info!(
            account_id = account.account_id,
            balance = %account.initial_balance,
            "account created"
        );
        Ok(())
    }

    /// Reads one account.
    pub async fn get_account(
        &self,
        account_id: i64,
        deadline: Deadline,
    ) -> Result<AccountSnapshot, LedgerError> {
        bounded(
            deadline,
            "reading account",
            accounts::Entity::find()
                .filter(accounts::Column::AccountId.eq(account_id))
                .one(&*self.db),
        )
        .await?
        .map(|model| model.snapshot())
        .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Reads every account in `account_ids` that exists.
    ///
    /// Missing ids are silently absent from the result; order is not
    /// guaranteed.
    pub async fn batch_read(
        &self,
        account_ids: &[i64],
        deadline: Deadline,
    ) -> Result<Vec<AccountSnapshot>, LedgerError> {
        if account_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = bounded(
            deadline,
            "reading accounts",
            accounts::Entity::find()
                .filter(accounts::Column::AccountId.is_in(account_ids.iter().copied()))
                .all(&*self.db),
        )
        .await?;

        Ok(models.iter().map(accounts::Model::snapshot).collect())
    }

    /// Reads and row-locks accounts inside `txn` (`SELECT ... FOR UPDATE`).
    ///
    /// Rows are locked in ascending `account_id` order, so two transfers over
    /// the same pair always queue instead of deadlocking.
    pub async fn lock_for_update(
        &self,
        txn: &DatabaseTransaction,
        account_ids: &[i64],
        deadline: Deadline,
    ) -> Result<Vec<AccountSnapshot>, LedgerError> {
        let models = bounded(
            deadline,
            "locking accounts",
            accounts::Entity::find()
                .filter(accounts::Column::AccountId.is_in(account_ids.iter().copied()))
                .order_by_asc(accounts::Column::AccountId)
                .lock_exclusive()
                .all(txn),
        )
        .await?;

        debug!(?account_ids, locked = models.len(), "accounts locked");
        Ok(models.iter().map(accounts::Model::snapshot).collect())
    }

    /// Adds `delta` to the stored balance inside `txn`.
    ///
    /// Sufficiency is not re-checked here. If the write would take the
    /// balance below zero the store rejects it and the call fails with
    /// `InsufficientFunds`.
    pub async fn apply_delta(
        &self,
        txn: &DatabaseTransaction,
        account_id: i64,
        delta: Decimal,
        deadline: Deadline,
    ) -> Result<(), LedgerError> {
        let result = within(deadline, "updating balance", async {
            accounts::Entity::update_many()
                .col_expr(
                    accounts::Column::Balance,
                    Expr::col(accounts::Column::Balance).add(delta),
                )
                .filter(accounts::Column::AccountId.eq(account_id))
                .exec(txn)
                .await
                .map_err(|err| {
                    if is_check_violation(&err) {
                        LedgerError::InsufficientFunds { account_id }
                    } else {
                        store_failure("updating balance", &err)
                    }
                })
        })
        .await?;

        if result.rows_affected == 0 {
            return Err(LedgerError::AccountNotFound(account_id));
        }

        debug!(account_id, %delta, "balance updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
