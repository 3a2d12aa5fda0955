//! Storage contracts for accounts and transactions
//!
//! This module defines the trait abstractions the ledger engine and query
//! façade are written against. The in-memory implementations in this crate
//! satisfy them; a durable backend only needs to implement these two traits
//! (plus whatever `LedgerError::Storage` mapping its failures require).

use crate::types::{
    Account, AccountId, AccountSummary, LedgerError, NewTransaction, Transaction, TransactionId,
    TransactionStatus,
};
use chrono::{DateTime, Utc};

/// Contract for account identity and balance storage
///
/// `adjust_balance` is the only balance mutator in the system. It is
/// reachable only from inside the engine's locked scope, which is what
/// makes a debit/credit pair atomic with respect to other mutations.
pub trait AccountStore {
    /// Create an account, returning its newly assigned identifier
    ///
    /// Identifiers are monotonically increasing and never reused.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `username` is empty, or if
    /// `initial_balance` is negative.
    fn create(
        &mut self,
        name: &str,
        username: &str,
        initial_balance: i64,
    ) -> Result<AccountId, LedgerError>;

    /// Fetch an account by identifier
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    fn get(&self, account: AccountId) -> Result<Account, LedgerError>;

    /// List all accounts as summaries, sorted by identifier
    fn list(&self) -> Vec<AccountSummary>;

    /// Remove an account
    ///
    /// Removes the account record only; the engine cascades the removal of
    /// transactions referencing it.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    fn delete(&mut self, account: AccountId) -> Result<(), LedgerError>;

    /// Add `delta` (which may be negative) to an account's balance
    ///
    /// Returns the new balance. Uses checked arithmetic; a negative result
    /// is permitted at this level because the engine's funds check runs
    /// before any debit is applied.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown, or
    /// `BalanceOverflow` if the adjustment would overflow.
    fn adjust_balance(&mut self, account: AccountId, delta: i64) -> Result<i64, LedgerError>;
}

/// Contract for transaction records and their lifecycle state
///
/// The store is the sole writer of transaction status and enforces the
/// terminal-state invariant at the storage boundary: a transaction that has
/// reached `accepted` or `rejected` never transitions again, even if a
/// caller bypasses the engine's own check.
pub trait TransactionStore {
    /// Store a new transaction, returning its newly assigned identifier
    fn create(&mut self, transaction: NewTransaction) -> Result<TransactionId, LedgerError>;

    /// Fetch a transaction by identifier
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if the identifier is unknown.
    fn get(&self, transaction: TransactionId) -> Result<Transaction, LedgerError>;

    /// List every transaction referencing an account as sender or receiver
    ///
    /// The order is consistent across calls (sorted by identifier).
    fn list_for(&self, account: AccountId) -> Vec<Transaction>;

    /// Transition a pending transaction to a terminal status
    ///
    /// Stamps `timestamp` over the stored one, recording last-mutation time.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if the identifier is unknown, or
    /// `AlreadyResolved` if the current status is not `pending`.
    fn set_status(
        &mut self,
        transaction: TransactionId,
        status: TransactionStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<(), LedgerError>;

    /// Remove every transaction referencing an account in either role
    ///
    /// Returns the number of transactions removed. Supports the
    /// account-deletion cascade.
    fn remove_for(&mut self, account: AccountId) -> usize;
}
