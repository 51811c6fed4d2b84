//! Property-based tests for ledger input validation.
//!
//! - Non-positive ids are always rejected
//! - Amounts below one are always rejected
//! - Whole-cent amounts of at least one are always accepted unchanged

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::validation::{validate_new_account, validate_transfer};

/// Strategy for ids that must be rejected.
fn non_positive_id() -> impl Strategy<Value = i64> {
    i64::MIN..=0i64
}

/// Strategy for ids that must be accepted.
fn positive_id() -> impl Strategy<Value = i64> {
    1i64..=i64::MAX
}

/// Strategy for cent amounts below 1.00 (including negatives).
fn below_minimum() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..100i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for cent amounts of at least 1.00.
fn at_least_minimum() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_non_positive_account_id_rejected(id in non_positive_id(), amount in at_least_minimum()) {
        let result = validate_new_account(id, &amount.to_string());
        prop_assert_eq!(result, Err(LedgerError::InvalidAccountId(id)));
    }

    #[test]
    fn prop_small_initial_balance_rejected(id in positive_id(), amount in below_minimum()) {
        let result = validate_new_account(id, &amount.to_string());
        let is_invalid_amount = matches!(result, Err(LedgerError::InvalidAmount { .. }));
        prop_assert!(is_invalid_amount);
    }

    #[test]
    fn prop_valid_initial_balance_accepted(id in positive_id(), amount in at_least_minimum()) {
        let account = validate_new_account(id, &amount.to_string()).unwrap();
        prop_assert_eq!(account.account_id, id);
        prop_assert_eq!(account.initial_balance.amount(), amount);
    }

    #[test]
    fn prop_small_transfer_amount_rejected(
        source in positive_id(),
        destination in positive_id(),
        amount in below_minimum(),
    ) {
        let result = validate_transfer(source, destination, &amount.to_string());
        let is_invalid_amount = matches!(result, Err(LedgerError::InvalidAmount { field: "amount", .. }));
        prop_assert!(is_invalid_amount);
    }

    #[test]
    fn prop_distinct_valid_transfer_accepted(
        source in positive_id(),
        destination in positive_id(),
        amount in at_least_minimum(),
    ) {
        prop_assume!(source != destination);
        let request = validate_transfer(source, destination, &amount.to_string()).unwrap();
        prop_assert_eq!(request.amount.amount(), amount);
    }
}
