//! Migration adding `CHECK (balance >= 0)` on `accounts`.
//!
//! A balance update that violates it fails with SQLSTATE 23514, which the
//! account repository reports as insufficient funds.

use sea_orm_migration::prelude::*;

/// Name of the check constraint.
const BALANCE_CHECK_CONSTRAINT: &str = "chk_accounts_balance_non_negative";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(&format!(
            "ALTER TABLE accounts ADD CONSTRAINT {BALANCE_CHECK_CONSTRAINT} CHECK (balance >= 0)"
        ))
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(&format!(
            "ALTER TABLE accounts DROP CONSTRAINT IF EXISTS {BALANCE_CHECK_CONSTRAINT}"
        ))
        .await?;
        Ok(())
    }
}
