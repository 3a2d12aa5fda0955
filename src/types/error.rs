//! Error types for the ledger
//!
//! This module defines all error types that can occur during ledger
//! operations. Errors carry enough context to report the failure to an
//! end user without further lookups.
//!
//! # Error Categories
//!
//! - **Not found**: a referenced account or transaction does not exist
//! - **Invalid input**: empty identity fields, non-positive amounts,
//!   negative opening balances, self-transfers
//! - **Insufficient funds**: the sender's balance is below the requested
//!   amount at the time of the check
//! - **Already resolved**: an attempt to resolve a transaction that has
//!   reached a terminal status
//! - **Storage**: unexpected storage-layer failure, kept distinct from the
//!   domain errors above so callers can tell a bad request from an
//!   unavailable store

use super::account::AccountId;
use super::transaction::{TransactionId, TransactionStatus};
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant except `Storage` is a recoverable domain error: the
/// caller can correct the request and retry, or simply report the failure.
/// No variant is fatal to the engine, and a failed mutating operation
/// leaves the stores exactly as they were.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The referenced account does not exist
    #[error("account {account} not found")]
    AccountNotFound {
        /// The unknown account identifier
        account: AccountId,
    },

    /// The referenced transaction does not exist
    #[error("transaction {transaction} not found")]
    TransactionNotFound {
        /// The unknown transaction identifier
        transaction: TransactionId,
    },

    /// A required text field was empty
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field
        field: String,
    },

    /// An account cannot be opened with a negative balance
    #[error("initial balance {balance} must not be negative")]
    NegativeInitialBalance {
        /// The rejected opening balance
        balance: i64,
    },

    /// Transfer amounts must be strictly positive
    #[error("transfer amount {amount} must be positive")]
    NonPositiveAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Sender and receiver must be different accounts
    #[error("account {account} cannot transfer to itself")]
    SelfTransfer {
        /// The account used on both sides
        account: AccountId,
    },

    /// The sender's balance is below the requested amount
    ///
    /// For a pending transaction this is not terminal: the transaction
    /// stays `pending` and resolution may be retried once funds return.
    #[error("insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// The sender account
        account: AccountId,
        /// The sender's current balance
        balance: i64,
        /// The amount that was requested
        requested: i64,
    },

    /// The transaction has already reached a terminal status
    #[error("transaction {transaction} is already {status}")]
    AlreadyResolved {
        /// The transaction identifier
        transaction: TransactionId,
        /// The terminal status it holds
        status: TransactionStatus,
    },

    /// A balance adjustment would overflow
    ///
    /// Unreachable with realistic minor-unit balances; the checked
    /// arithmetic guard is kept so a corrupted store cannot wrap.
    #[error("balance adjustment overflow for account {account}")]
    BalanceOverflow {
        /// The account whose balance would overflow
        account: AccountId,
    },

    /// Unexpected storage-layer failure
    #[error("storage error: {message}")]
    Storage {
        /// Description of the underlying failure
        message: String,
    },
}

// Conversion from io::Error for storage backends built on the contracts
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Storage {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(transaction: TransactionId) -> Self {
        LedgerError::TransactionNotFound { transaction }
    }

    /// Create an EmptyField error
    pub fn empty_field(field: &str) -> Self {
        LedgerError::EmptyField {
            field: field.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an AlreadyResolved error
    pub fn already_resolved(transaction: TransactionId, status: TransactionStatus) -> Self {
        LedgerError::AlreadyResolved {
            transaction,
            status,
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(account: AccountId) -> Self {
        LedgerError::SelfTransfer { account }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(account: AccountId) -> Self {
        LedgerError::BalanceOverflow { account }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 7 },
        "account 7 not found"
    )]
    #[case::transaction_not_found(
        LedgerError::TransactionNotFound { transaction: 99 },
        "transaction 99 not found"
    )]
    #[case::empty_field(
        LedgerError::EmptyField { field: "name".to_string() },
        "name must not be empty"
    )]
    #[case::negative_initial_balance(
        LedgerError::NegativeInitialBalance { balance: -50 },
        "initial balance -50 must not be negative"
    )]
    #[case::non_positive_amount(
        LedgerError::NonPositiveAmount { amount: 0 },
        "transfer amount 0 must be positive"
    )]
    #[case::self_transfer(
        LedgerError::SelfTransfer { account: 3 },
        "account 3 cannot transfer to itself"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1, balance: 10, requested: 50 },
        "insufficient funds for account 1: balance 10, requested 50"
    )]
    #[case::already_resolved(
        LedgerError::AlreadyResolved { transaction: 4, status: TransactionStatus::Accepted },
        "transaction 4 is already accepted"
    )]
    #[case::balance_overflow(
        LedgerError::BalanceOverflow { account: 2 },
        "balance adjustment overflow for account 2"
    )]
    #[case::storage(
        LedgerError::Storage { message: "disk unavailable".to_string() },
        "storage error: disk unavailable"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found(7),
        LedgerError::AccountNotFound { account: 7 }
    )]
    #[case::transaction_not_found(
        LedgerError::transaction_not_found(99),
        LedgerError::TransactionNotFound { transaction: 99 }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(1, 10, 50),
        LedgerError::InsufficientFunds { account: 1, balance: 10, requested: 50 }
    )]
    #[case::already_resolved(
        LedgerError::already_resolved(4, TransactionStatus::Rejected),
        LedgerError::AlreadyResolved { transaction: 4, status: TransactionStatus::Rejected }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Storage { .. }));
        assert_eq!(error.to_string(), "storage error: Permission denied");
    }
}
