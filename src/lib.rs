//! Peerpay Ledger Library
//! # Overview
//!
//! This library provides the core of a peer-to-peer money-transfer ledger:
//! accounts hold a balance, and transactions move funds between accounts
//! through a pending/accepted/rejected lifecycle.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, TransactionStatus, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The ledger engine, the only path through which balances change
//!   - [`core::account_store`] - Account identity and balance storage
//!   - [`core::transaction_store`] - Transaction records and lifecycle state
//!   - [`core::queries`] - Read-only composition of accounts and their transactions
//!   - [`core::traits`] - Storage contracts a durable backend would implement
//!
//! # Transaction Lifecycle
//!
//! A transaction is created in one of three statuses depending on the
//! caller's intent:
//!
//! - **Request**: a transfer awaiting the receiver's decision (`pending`)
//! - **Execute**: funds move immediately (`accepted`)
//! - **Decline**: a declined request is recorded, no funds move (`rejected`)
//!
//! A `pending` transaction is resolved at most once, to `accepted` (funds
//! move) or `rejected` (no funds move). Both outcomes are terminal.
//!
//! # Concurrency
//!
//! The whole ledger state lives behind a single `parking_lot::RwLock`.
//! Mutating operations serialize on the write lock, so every debit/credit
//! pair is atomic with respect to all other mutations; readers share the
//! read lock and always observe a consistent snapshot.

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::{
    in_memory_ledger, AccountProfile, LedgerEngine, LedgerQueries, LedgerState,
    MemoryAccountStore, MemoryTransactionStore, SharedLedger,
};
pub use crate::types::{
    Account, AccountId, AccountSummary, LedgerError, NewTransaction, Transaction, TransactionId,
    TransactionStatus, TransferIntent,
};
