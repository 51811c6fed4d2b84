//! Property-based tests for transfer planning.
//!
//! - Conservation: a plan never creates or destroys money
//! - Non-negativity: an accepted plan never leaves the source below zero

use coffer_shared::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::plan::plan_transfer;
use crate::ledger::{AccountSnapshot, LedgerError, validate_transfer};

/// Strategy for balances from 0.00 to 1,000,000.00.
fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for transfer amounts from 1.00 to 1,000,000.00, as text.
fn amount_text_strategy() -> impl Strategy<Value = String> {
    (100i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2).to_string())
}

fn accounts(source: Decimal, destination: Decimal) -> [AccountSnapshot; 2] {
    [
        AccountSnapshot {
            account_id: 1,
            balance: Money::from_decimal(source),
        },
        AccountSnapshot {
            account_id: 2,
            balance: Money::from_decimal(destination),
        },
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The sum of both balances is unchanged by any accepted plan.
    #[test]
    fn prop_plan_conserves_total(
        source in balance_strategy(),
        destination in balance_strategy(),
        amount in amount_text_strategy(),
    ) {
        let request = validate_transfer(1, 2, &amount).unwrap();
        if let Ok(plan) = plan_transfer(&request, &accounts(source, destination)) {
            let before = source + destination;
            let after = plan.source_balance_after().amount()
                + plan.destination_balance_after().amount();
            prop_assert_eq!(before, after);
            prop_assert_eq!(plan.debit, -plan.credit);
        }
    }

    /// A plan is accepted exactly when the source covers the amount.
    #[test]
    fn prop_plan_accepted_iff_sufficient(
        source in balance_strategy(),
        destination in balance_strategy(),
        amount in amount_text_strategy(),
    ) {
        let request = validate_transfer(1, 2, &amount).unwrap();
        let result = plan_transfer(&request, &accounts(source, destination));

        if source >= request.amount.amount() {
            let plan = result.unwrap();
            prop_assert!(!plan.source_balance_after().is_negative());
        } else {
            prop_assert_eq!(result, Err(LedgerError::InsufficientFunds { account_id: 1 }));
        }
    }
}
