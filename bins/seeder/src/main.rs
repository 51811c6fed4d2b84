//! Database seeder for Coffer development and testing.
//!
//! Opens the two demo accounts used throughout the docs:
//! account 1 with 100.00 and account 2 with 10.00.
//! Accounts that already exist are left untouched.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use coffer_core::{Deadline, ErrorKind};
use coffer_db::{AccountRepository, connect};
use coffer_shared::AppConfig;
use tracing::{info, warn};

/// Demo accounts: (account id, opening balance).
const DEMO_ACCOUNTS: [(i64, &str); 2] = [(1, "100.00"), (2, "10.00")];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffer=info,coffer_db=info".into()),
        )
        .init();

    let config = AppConfig::load()?;
    let db = connect(&config.database).await?;
    let accounts = AccountRepository::new(Arc::new(db));

    for (account_id, balance) in DEMO_ACCOUNTS {
        match accounts
            .create_account(account_id, balance, Deadline::NONE)
            .await
        {
            Ok(()) => info!(account_id, balance, "Seeded account"),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                info!(account_id, "Account already exists, skipping");
            }
            Err(e) => {
                warn!(account_id, error = %e, "Failed to seed account");
                return Err(e.into());
            }
        }
    }

    info!("Seeding complete");
    Ok(())
}
