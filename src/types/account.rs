//! Account-related types for the ledger
//!
//! This module defines the Account structure and the listing summary
//! used when enumerating accounts.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned on creation, immutable, monotonically increasing and never
/// reused (deleting an account does not recycle its identifier).
pub type AccountId = u64;

/// A ledger account
///
/// Holds identity and the current balance. The balance is denominated in
/// minor currency units (e.g. cents) and is only ever mutated by a
/// completed transfer executed through the ledger engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,

    /// Display name (non-empty)
    pub name: String,

    /// Username (non-empty; uniqueness is not enforced)
    pub username: String,

    /// Current balance in minor currency units
    ///
    /// Never negative after any exposed operation: a transfer that would
    /// drive the sender below zero is rejected before it is applied.
    pub balance: i64,
}

/// Account listing entry
///
/// The shape returned when enumerating accounts: identity only, without
/// the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Unique account identifier
    pub id: AccountId,

    /// Display name
    pub name: String,

    /// Username
    pub username: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        AccountSummary {
            id: account.id,
            name: account.name.clone(),
            username: account.username.clone(),
        }
    }
}
