//! In-memory account storage
//!
//! This module provides `MemoryAccountStore`, the HashMap-backed
//! implementation of the [`AccountStore`] contract. It owns identifier
//! assignment (monotonic, never reused) and validates identity fields and
//! opening balances at the storage boundary.
//!
//! The store is not synchronized on its own: the engine wraps it, together
//! with the transaction store, behind a single lock.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, AccountSummary, LedgerError};
use std::collections::HashMap;

/// HashMap-backed account store
///
/// Maintains an in-memory map of account identifiers to accounts plus the
/// next identifier to assign. Deleting an account does not recycle its
/// identifier.
#[derive(Debug)]
pub struct MemoryAccountStore {
    /// Map of account identifiers to accounts
    accounts: HashMap<AccountId, Account>,

    /// Next identifier to assign
    next_id: AccountId,
}

impl MemoryAccountStore {
    /// Create a new store with no accounts
    ///
    /// Identifier assignment starts at 1.
    pub fn new() -> Self {
        MemoryAccountStore {
            accounts: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccountStore {
    fn create(
        &mut self,
        name: &str,
        username: &str,
        initial_balance: i64,
    ) -> Result<AccountId, LedgerError> {
        if name.is_empty() {
            return Err(LedgerError::empty_field("name"));
        }
        if username.is_empty() {
            return Err(LedgerError::empty_field("username"));
        }
        if initial_balance < 0 {
            return Err(LedgerError::NegativeInitialBalance {
                balance: initial_balance,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.accounts.insert(
            id,
            Account {
                id,
                name: name.to_string(),
                username: username.to_string(),
                balance: initial_balance,
            },
        );
        Ok(id)
    }

    fn get(&self, account: AccountId) -> Result<Account, LedgerError> {
        self.accounts
            .get(&account)
            .cloned()
            .ok_or_else(|| LedgerError::account_not_found(account))
    }

    fn list(&self) -> Vec<AccountSummary> {
        let mut summaries: Vec<AccountSummary> =
            self.accounts.values().map(AccountSummary::from).collect();
        summaries.sort_by_key(|summary| summary.id);
        summaries
    }

    fn delete(&mut self, account: AccountId) -> Result<(), LedgerError> {
        self.accounts
            .remove(&account)
            .map(|_| ())
            .ok_or_else(|| LedgerError::account_not_found(account))
    }

    fn adjust_balance(&mut self, account: AccountId, delta: i64) -> Result<i64, LedgerError> {
        let entry = self
            .accounts
            .get_mut(&account)
            .ok_or_else(|| LedgerError::account_not_found(account))?;

        entry.balance = entry
            .balance
            .checked_add(delta)
            .ok_or_else(|| LedgerError::balance_overflow(account))?;

        Ok(entry.balance)
    }
}
