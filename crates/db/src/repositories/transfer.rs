//! Transfer engine: moves funds between two accounts atomically.
//!
//! A transfer is checked twice. The optimistic pass reads both accounts
//! outside any transaction and rejects obvious failures cheaply. The
//! authoritative pass runs inside the transaction against row-locked
//! balances, so a concurrent debit between the two passes cannot overdraw
//! the source.

use std::sync::Arc;

use coffer_core::ledger::{validate_transfer, LedgerError, TransferRequest};
use coffer_core::transfer::{plan_transfer, TransferPlan, TransferState};
use coffer_core::Deadline;
use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait};
use tracing::{debug, info, warn};

use super::AccountRepository;
use crate::entities::transactions;
use crate::store::{bounded, commit, roll_back};

/// Repository driving the transfer lifecycle.
#[derive(Debug, Clone)]
pub struct TransferRepository {
    db: Arc<DatabaseConnection>,
    accounts: AccountRepository,
}

impl TransferRepository {
    /// Creates a new transfer repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let accounts = AccountRepository::new(Arc::clone(&db));
        Self { db, accounts }
    }

    /// Moves `amount` from `source_account_id` to `destination_account_id`.
    ///
    /// On success the transfer row and both balance updates are committed
    /// together. On any failure nothing is written.
    pub async fn create_transfer(
        &self,
        source_account_id: i64,
        destination_account_id: i64,
        amount: &str,
        deadline: Deadline,
    ) -> Result<(), LedgerError> {
        let mut state = TransferState::Received;

        let result = self
            .run(
                &mut state,
                source_account_id,
                destination_account_id,
                amount,
                deadline,
            )
            .await;

        match &result {
            Ok(()) => info!(
                source_account_id,
                destination_account_id,
                amount,
                "transfer committed"
            ),
            Err(err) => {
                let failed = state.fail(err.kind());
                warn!(
                    source_account_id,
                    destination_account_id,
                    amount,
                    from = %state,
                    state = %failed,
                    error = %err,
                    "transfer failed"
                );
            }
        }
        result
    }

    async fn run(
        &self,
        state: &mut TransferState,
        source_account_id: i64,
        destination_account_id: i64,
        amount: &str,
        deadline: Deadline,
    ) -> Result<(), LedgerError> {
        let request = validate_transfer(source_account_id, destination_account_id, amount)?;
        advance(state);

        let accounts = self
            .accounts
            .batch_read(&request.lock_order(), deadline)
            .await?;
        advance(state);

        plan_transfer(&request, &accounts)?;
        advance(state);

        let txn = bounded(deadline, "beginning transfer", self.db.begin()).await?;
        advance(state);

        let plan = match self.write(&txn, &request, deadline).await {
            Ok(plan) => plan,
            Err(err) => {
                roll_back(txn).await;
                return Err(err);
            }
        };

        // Not bounded by the deadline: once COMMIT is sent, the outcome is the server's.
        commit(txn, "committing transfer").await?;
        advance(state);

        debug!(
            source_balance = %plan.source_balance_after(),
            destination_balance = %plan.destination_balance_after(),
            "balances after transfer"
        );
        Ok(())
    }

    /// Everything that happens inside the atomic scope.
    async fn write(
        &self,
        txn: &DatabaseTransaction,
        request: &TransferRequest,
        deadline: Deadline,
    ) -> Result<TransferPlan, LedgerError> {
        let locked = self
            .accounts
            .lock_for_update(txn, &request.lock_order(), deadline)
            .await?;
        let plan = plan_transfer(request, &locked)?;

        let record = transactions::ActiveModel {
            source_account_id: Set(request.source_account_id),
            destination_account_id: Set(request.destination_account_id),
            amount: Set(request.amount.amount()),
            ..Default::default()
        };
        bounded(
            deadline,
            "recording transfer",
            transactions::Entity::insert(record).exec_without_returning(txn),
        )
        .await?;

        self.accounts
            .apply_delta(txn, request.source_account_id, plan.debit, deadline)
            .await?;
        self.accounts
            .apply_delta(txn, request.destination_account_id, plan.credit, deadline)
            .await?;

        Ok(plan)
    }
}

fn advance(state: &mut TransferState) {
    let next = state.next();
    debug!(from = %state, to = %next, "transfer state");
    *state = next;
}

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
