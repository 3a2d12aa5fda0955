//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `traits` - Storage contracts for interchangeable backend implementations
//! - `engine` - The ledger engine: validation, transfers, and the transaction state machine
//! - `account_store` - In-memory account identity and balance storage
//! - `transaction_store` - In-memory transaction records and lifecycle state
//! - `queries` - Read-only composition of accounts and their transactions

pub mod account_store;
pub mod engine;
pub mod queries;
pub mod traits;
pub mod transaction_store;

pub use account_store::MemoryAccountStore;
pub use engine::{LedgerEngine, LedgerState, SharedLedger};
pub use queries::{AccountProfile, LedgerQueries};
pub use traits::{AccountStore, TransactionStore};
pub use transaction_store::MemoryTransactionStore;

use std::sync::Arc;

/// Build a ledger backed by the in-memory stores
///
/// Constructs the shared state once and hands out the two handles that a
/// process wires into its transport layer: the engine for mutations and
/// the query façade for reads. Both handles are cheap to clone.
pub fn in_memory_ledger() -> (
    LedgerEngine<MemoryAccountStore, MemoryTransactionStore>,
    LedgerQueries<MemoryAccountStore, MemoryTransactionStore>,
) {
    let state =
        LedgerState::new(MemoryAccountStore::new(), MemoryTransactionStore::new()).into_shared();
    (
        LedgerEngine::new(Arc::clone(&state)),
        LedgerQueries::new(state),
    )
}
