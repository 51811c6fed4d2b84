//! Transfer rules: the per-request state machine and the sufficiency check.
//!
//! The database layer drives these; nothing here performs I/O.

pub mod plan;
pub mod state;

#[cfg(test)]
mod props;

pub use plan::{TransferPlan, check_sufficiency, plan_transfer};
pub use state::TransferState;
