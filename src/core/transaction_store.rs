//! In-memory transaction storage
//!
//! This module provides `MemoryTransactionStore`, the HashMap-backed
//! implementation of the [`TransactionStore`] contract. It owns identifier
//! assignment and enforces the terminal-state invariant at the storage
//! boundary: once a transaction is `accepted` or `rejected`, `set_status`
//! refuses any further transition.

use crate::core::traits::TransactionStore;
use crate::types::{
    AccountId, LedgerError, NewTransaction, Transaction, TransactionId, TransactionStatus,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// HashMap-backed transaction store
#[derive(Debug)]
pub struct MemoryTransactionStore {
    /// Map of transaction identifiers to transactions
    transactions: HashMap<TransactionId, Transaction>,

    /// Next identifier to assign
    next_id: TransactionId,
}

impl MemoryTransactionStore {
    /// Create a new store with no transactions
    pub fn new() -> Self {
        MemoryTransactionStore {
            transactions: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&mut self, transaction: NewTransaction) -> Result<TransactionId, LedgerError> {
        let id = self.next_id;
        self.next_id += 1;
        self.transactions.insert(
            id,
            Transaction {
                id,
                timestamp: transaction.timestamp,
                sender: transaction.sender,
                receiver: transaction.receiver,
                amount: transaction.amount,
                message: transaction.message,
                status: transaction.status,
            },
        );
        Ok(id)
    }

    fn get(&self, transaction: TransactionId) -> Result<Transaction, LedgerError> {
        self.transactions
            .get(&transaction)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(transaction))
    }

    fn list_for(&self, account: AccountId) -> Vec<Transaction> {
        let mut related: Vec<Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.sender == account || tx.receiver == account)
            .cloned()
            .collect();
        related.sort_by_key(|tx| tx.id);
        related
    }

    fn set_status(
        &mut self,
        transaction: TransactionId,
        status: TransactionStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let entry = self
            .transactions
            .get_mut(&transaction)
            .ok_or_else(|| LedgerError::transaction_not_found(transaction))?;

        if entry.status != TransactionStatus::Pending {
            return Err(LedgerError::already_resolved(transaction, entry.status));
        }

        entry.status = status;
        entry.timestamp = timestamp;
        Ok(())
    }

    fn remove_for(&mut self, account: AccountId) -> usize {
        let before = self.transactions.len();
        self.transactions
            .retain(|_, tx| tx.sender != account && tx.receiver != account);
        before - self.transactions.len()
    }
}
