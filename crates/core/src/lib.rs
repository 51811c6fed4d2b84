//! Core ledger rules for Coffer.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Validation, the sufficiency rule and the transfer lifecycle live here; the
//! `coffer-db` crate drives them against PostgreSQL.
//!
//! # Modules
//!
//! - `ledger` - Account and transfer types, validation, error taxonomy
//! - `transfer` - Transfer planning and the per-request state machine
//! - `deadline` - Caller-imposed deadlines carried into every store call

pub mod deadline;
pub mod ledger;
pub mod transfer;

pub use deadline::Deadline;
pub use ledger::{AccountSnapshot, ErrorKind, LedgerError, NewAccount, TransferRequest};
pub use transfer::{TransferPlan, TransferState};
