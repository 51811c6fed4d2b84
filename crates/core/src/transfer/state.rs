//! Per-request transfer lifecycle.

use std::fmt;

use crate::ledger::ErrorKind;

/// Where a single transfer request is in its lifecycle.
///
/// ```text
/// received -> validated -> accounts-fetched -> sufficiency-checked -> writing -> committed
///     \___________\______________\___________________\_______________\_____> failed(kind)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// Request accepted, nothing checked yet.
    Received,
    /// Ids and amount passed validation.
    Validated,
    /// Both accounts were read from the store.
    AccountsFetched,
    /// Source balance covers the amount.
    SufficiencyChecked,
    /// Inside the atomic scope.
    Writing,
    /// Transaction committed. Terminal.
    Committed,
    /// Stopped with an error. Terminal.
    Failed(ErrorKind),
}

impl TransferState {
    /// Returns the successor on the happy path. Terminal states stay put.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Received => Self::Validated,
            Self::Validated => Self::AccountsFetched,
            Self::AccountsFetched => Self::SufficiencyChecked,
            Self::SufficiencyChecked => Self::Writing,
            Self::Writing => Self::Committed,
            terminal @ (Self::Committed | Self::Failed(_)) => terminal,
        }
    }

    /// Moves to `Failed(kind)` unless already terminal.
    #[must_use]
    pub const fn fail(self, kind: ErrorKind) -> Self {
        match self {
            Self::Committed | Self::Failed(_) => self,
            _ => Self::Failed(kind),
        }
    }

    /// Returns true for `Committed` and `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed | Self::Failed(_))
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => f.write_str("received"),
            Self::Validated => f.write_str("validated"),
            Self::AccountsFetched => f.write_str("accounts-fetched"),
            Self::SufficiencyChecked => f.write_str("sufficiency-checked"),
            Self::Writing => f.write_str("writing"),
            Self::Committed => f.write_str("committed"),
            Self::Failed(kind) => write!(f, "failed({kind:?})"),
        }
    }
}
