//! Read-only ledger queries
//!
//! This module provides the `LedgerQueries` façade: it assembles accounts
//! and their transactions for presentation, without mutating anything and
//! without going through the engine. It shares the engine's state handle
//! but only ever takes the read lock, so queries run concurrently with
//! each other and always observe a consistent snapshot.

use crate::core::engine::SharedLedger;
use crate::core::traits::{AccountStore, TransactionStore};
use crate::types::{
    Account, AccountId, AccountSummary, LedgerError, Transaction, TransactionId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An account together with every transaction it participates in
///
/// Serializes with the account fields flattened next to the transaction
/// array, the shape a transport layer presents for an account detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// The account record
    #[serde(flatten)]
    pub account: Account,

    /// Transactions naming the account as sender or receiver, sorted by id
    pub transactions: Vec<Transaction>,
}

/// Read-only query façade over the shared ledger state
///
/// Cheap to clone; clones share the same underlying state.
#[derive(Debug)]
pub struct LedgerQueries<A, T> {
    state: SharedLedger<A, T>,
}

// Clones share the state handle; the stores themselves are never cloned.
impl<A, T> Clone for LedgerQueries<A, T> {
    fn clone(&self) -> Self {
        LedgerQueries {
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: AccountStore, T: TransactionStore> LedgerQueries<A, T> {
    /// Create a query façade over the shared state
    pub fn new(state: SharedLedger<A, T>) -> Self {
        LedgerQueries { state }
    }

    /// List all accounts as summaries, sorted by id
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.state.read().accounts.list()
    }

    /// Fetch a single account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    pub fn account(&self, account: AccountId) -> Result<Account, LedgerError> {
        self.state.read().accounts.get(account)
    }

    /// Fetch an account together with its transactions in either role
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    pub fn account_profile(&self, account: AccountId) -> Result<AccountProfile, LedgerError> {
        let state = self.state.read();
        let account = state.accounts.get(account)?;
        let transactions = state.transactions.list_for(account.id);
        Ok(AccountProfile {
            account,
            transactions,
        })
    }

    /// Fetch a single transaction
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if the identifier is unknown.
    pub fn transaction(&self, transaction: TransactionId) -> Result<Transaction, LedgerError> {
        self.state.read().transactions.get(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::in_memory_ledger;
    use crate::types::{TransactionStatus, TransferIntent};

    #[test]
    fn test_list_accounts_is_sorted() {
        let (engine, queries) = in_memory_ledger();
        engine.create_account("Alice", "alice", 0).unwrap();
        engine.create_account("Bob", "bob", 0).unwrap();
        engine.create_account("Carol", "carol", 0).unwrap();

        let ids: Vec<AccountId> = queries.list_accounts().iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_account_returns_current_balance() {
        let (engine, queries) = in_memory_ledger();
        let a = engine.create_account("Alice", "alice", 100).unwrap();
        let b = engine.create_account("Bob", "bob", 0).unwrap();
        engine.submit(a, b, 40, "", TransferIntent::Execute).unwrap();

        assert_eq!(queries.account(a).unwrap().balance, 60);
    }

    #[test]
    fn test_account_unknown_id_fails() {
        let (_engine, queries) = in_memory_ledger();

        let result = queries.account(5);

        assert_eq!(result.unwrap_err(), LedgerError::account_not_found(5));
    }

    #[test]
    fn test_profile_collects_both_roles() {
        let (engine, queries) = in_memory_ledger();
        let a = engine.create_account("Alice", "alice", 100).unwrap();
        let b = engine.create_account("Bob", "bob", 100).unwrap();
        let c = engine.create_account("Carol", "carol", 100).unwrap();

        let sent = engine.submit(a, b, 10, "", TransferIntent::Execute).unwrap();
        let received = engine.submit(b, a, 5, "", TransferIntent::Request).unwrap();
        engine.submit(b, c, 5, "", TransferIntent::Request).unwrap();

        let profile = queries.account_profile(a).unwrap();

        assert_eq!(profile.account.id, a);
        let ids: Vec<TransactionId> = profile.transactions.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![sent.id, received.id]);
    }

    #[test]
    fn test_profile_of_fresh_account_has_no_transactions() {
        let (engine, queries) = in_memory_ledger();
        let a = engine.create_account("Alice", "alice", 0).unwrap();

        let profile = queries.account_profile(a).unwrap();

        assert!(profile.transactions.is_empty());
    }

    #[test]
    fn test_profile_unknown_account_fails() {
        let (_engine, queries) = in_memory_ledger();

        let result = queries.account_profile(9);

        assert_eq!(result.unwrap_err(), LedgerError::account_not_found(9));
    }

    #[test]
    fn test_profile_serializes_with_flattened_account() {
        let (engine, queries) = in_memory_ledger();
        let a = engine.create_account("Alice", "alice", 100).unwrap();
        let b = engine.create_account("Bob", "bob", 0).unwrap();
        engine
            .submit(a, b, 30, "lunch", TransferIntent::Execute)
            .unwrap();

        let profile = queries.account_profile(a).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["balance"], 70);
        assert_eq!(json["transactions"][0]["amount"], 30);
        assert_eq!(json["transactions"][0]["status"], "accepted");
    }

    #[test]
    fn test_transaction_lookup() {
        let (engine, queries) = in_memory_ledger();
        let a = engine.create_account("Alice", "alice", 100).unwrap();
        let b = engine.create_account("Bob", "bob", 0).unwrap();
        let tx = engine
            .submit(a, b, 30, "lunch", TransferIntent::Execute)
            .unwrap();

        let fetched = queries.transaction(tx.id).unwrap();

        assert_eq!(fetched, tx);
        assert_eq!(fetched.status, TransactionStatus::Accepted);
    }

    #[test]
    fn test_transaction_unknown_id_fails() {
        let (_engine, queries) = in_memory_ledger();

        let result = queries.transaction(77);

        assert_eq!(result.unwrap_err(), LedgerError::transaction_not_found(77));
    }
}
