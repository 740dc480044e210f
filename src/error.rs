//! Domain-specific errors for the teller terminal.
//!
//! Every variant here is a business failure that gets presented to the
//! customer and never terminates the session:
//! - Ledger lookups against an unknown account id
//! - Raw input tokens that match no recognized action
//! - Withdraw/deposit amounts that are not positive integers
//!
//! Technical failures (I/O, malformed seed CSV) are not modeled here; they
//! propagate at the runner boundary instead.

use crate::ledger::AccountId;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no account with id {0}")]
    AccountNotFound(AccountId),
    #[error("unrecognized action '{0}'")]
    InvalidAction(String),
    #[error("amount must be a positive integer")]
    InvalidAmount,
    #[error("expected an account id, got '{0}'")]
    InvalidAccountId(String),
}
