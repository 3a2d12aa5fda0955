//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types and identifiers
//! - `transaction`: Transaction-related types, statuses, and identifiers
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, AccountSummary};
pub use error::LedgerError;
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionStatus, TransferIntent,
};
