//! Deadline and error plumbing shared by the repositories.
//!
//! Every store call goes through [`within`] or [`bounded`], so a request
//! never waits on PostgreSQL past its [`Deadline`] and driver errors never
//! leave this crate as anything but [`LedgerError::Store`].

use std::future::Future;
use std::time::Duration;

use coffer_core::{Deadline, LedgerError};
use sea_orm::{DatabaseTransaction, DbErr, RuntimeErr, SqlErr};
use tracing::{debug, error, warn};

/// How long a commit or rollback may take, independent of the request deadline.
///
/// Abandoning an in-flight COMMIT would leave the caller unsure whether the
/// write landed, so transaction ends are bounded by this instead.
pub(crate) const SETTLE_GRACE: Duration = Duration::from_secs(5);

/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Runs `fut` until it resolves or `deadline` passes.
pub(crate) async fn within<T, F>(
    deadline: Deadline,
    operation: &'static str,
    fut: F,
) -> Result<T, LedgerError>
where
    F: Future<Output = Result<T, LedgerError>>,
{
    let Some(at) = deadline.instant() else {
        return fut.await;
    };
    if deadline.is_expired() {
        warn!(operation, "deadline already passed");
        return Err(LedgerError::DeadlineExceeded(operation));
    }

    tokio::time::timeout_at(tokio::time::Instant::from_std(at), fut)
        .await
        .unwrap_or_else(|_| {
            warn!(operation, "deadline exceeded");
            Err(LedgerError::DeadlineExceeded(operation))
        })
}

/// Like [`within`], for futures that fail with a raw [`DbErr`].
pub(crate) async fn bounded<T, F>(
    deadline: Deadline,
    operation: &'static str,
    fut: F,
) -> Result<T, LedgerError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    within(deadline, operation, async {
        fut.await.map_err(|err| store_failure(operation, &err))
    })
    .await
}

/// Logs the driver error and returns the opaque store failure.
pub(crate) fn store_failure(operation: &'static str, err: &DbErr) -> LedgerError {
    error!(operation, error = %err, "store operation failed");
    LedgerError::Store(operation)
}

/// True when `err` is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// True when `err` is a CHECK-constraint violation.
pub(crate) fn is_check_violation(err: &DbErr) -> bool {
    let runtime = match err {
        DbErr::Exec(runtime) | DbErr::Query(runtime) => runtime,
        _ => return false,
    };
    match runtime {
        RuntimeErr::SqlxError(sqlx::Error::Database(db_err)) => {
            db_err.code().as_deref() == Some(CHECK_VIOLATION)
        }
        _ => false,
    }
}

/// Commits `txn`, giving up after [`SETTLE_GRACE`].
///
/// A commit that times out is reported as a store failure: its outcome is
/// unknown, not rolled back.
pub(crate) async fn commit(
    txn: DatabaseTransaction,
    operation: &'static str,
) -> Result<(), LedgerError> {
    match tokio::time::timeout(SETTLE_GRACE, txn.commit()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(store_failure(operation, &err)),
        Err(_) => {
            error!(operation, "commit timed out, outcome unknown");
            Err(LedgerError::Store(operation))
        }
    }
}

/// Rolls `txn` back, giving up after [`SETTLE_GRACE`].
///
/// A transaction that cannot be rolled back explicitly is dropped, which
/// PostgreSQL treats as a rollback when the connection returns to the pool.
pub(crate) async fn roll_back(txn: DatabaseTransaction) {
    match tokio::time::timeout(SETTLE_GRACE, txn.rollback()).await {
        Ok(Ok(())) => debug!("transaction rolled back"),
        Ok(Err(err)) => warn!(error = %err, "rollback failed"),
        Err(_) => warn!("rollback timed out"),
    }
}
