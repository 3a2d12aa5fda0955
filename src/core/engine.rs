//! Ledger engine
//!
//! This module provides the `LedgerEngine`, the only component authorized
//! to move money and to resolve a transaction's fate. It coordinates the
//! account store and the transaction store, enforcing:
//!
//! - Existence and input validation before any write
//! - The funds check before any debit (balances never go negative)
//! - The transaction state machine (`pending` → `accepted`/`rejected`,
//!   both terminal)
//! - Atomicity of every debit/credit pair and its status write
//!
//! # Concurrency
//!
//! The whole ledger state (both stores) lives behind a single
//! `parking_lot::RwLock`, shared between the engine and the query façade.
//! Every mutating operation holds the write lock from validation through
//! the last store write, so a transfer is atomic with respect to every
//! other mutation and readers never observe a debited sender without the
//! credited receiver. Account deletion serializes behind the same lock, so
//! it cannot race a resolution into a dangling reference.

use crate::core::traits::{AccountStore, TransactionStore};
use crate::types::{
    AccountId, LedgerError, NewTransaction, Transaction, TransactionId, TransactionStatus,
    TransferIntent,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// The combined ledger state: both stores behind one handle
///
/// Constructed once at process start and injected into the engine and the
/// query façade; there is no implicit global.
#[derive(Debug)]
pub struct LedgerState<A, T> {
    pub(crate) accounts: A,
    pub(crate) transactions: T,
}

impl<A: AccountStore, T: TransactionStore> LedgerState<A, T> {
    /// Bundle an account store and a transaction store into one state
    pub fn new(accounts: A, transactions: T) -> Self {
        LedgerState {
            accounts,
            transactions,
        }
    }

    /// Wrap the state in the shared lock the engine and queries hold
    pub fn into_shared(self) -> SharedLedger<A, T> {
        Arc::new(RwLock::new(self))
    }
}

/// Shared, lock-protected ledger state
pub type SharedLedger<A, T> = Arc<RwLock<LedgerState<A, T>>>;

/// The ledger engine
///
/// Cheap to clone; clones share the same underlying state. All operations
/// are synchronous: each one completes, fails immediately, or blocks
/// briefly on the write lock. A failed operation leaves both stores
/// exactly as they were.
#[derive(Debug)]
pub struct LedgerEngine<A, T> {
    state: SharedLedger<A, T>,
}

// Clones share the state handle; the stores themselves are never cloned.
impl<A, T> Clone for LedgerEngine<A, T> {
    fn clone(&self) -> Self {
        LedgerEngine {
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: AccountStore, T: TransactionStore> LedgerEngine<A, T> {
    /// Create an engine over the shared state
    pub fn new(state: SharedLedger<A, T>) -> Self {
        LedgerEngine { state }
    }

    /// Create an account
    ///
    /// # Arguments
    ///
    /// * `name` - Display name (non-empty)
    /// * `username` - Username (non-empty; uniqueness is not enforced)
    /// * `initial_balance` - Opening balance in minor units (non-negative)
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `username` is empty or
    /// `initial_balance` is negative.
    pub fn create_account(
        &self,
        name: &str,
        username: &str,
        initial_balance: i64,
    ) -> Result<AccountId, LedgerError> {
        let mut state = self.state.write();
        let id = state.accounts.create(name, username, initial_balance)?;
        info!(account = id, username, "account created");
        Ok(id)
    }

    /// Delete an account and every transaction that references it
    ///
    /// Hard delete: the account and all transactions naming it as sender
    /// or receiver are removed in one atomic step. Other balances are not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    pub fn delete_account(&self, account: AccountId) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        state.accounts.delete(account)?;
        let removed = state.transactions.remove_for(account);
        info!(account, removed_transactions = removed, "account deleted");
        Ok(())
    }

    /// Submit a transfer between two accounts
    ///
    /// The intent decides the created transaction's initial status:
    ///
    /// * [`TransferIntent::Request`] - record a `pending` request awaiting
    ///   the receiver's decision; no funds move
    /// * [`TransferIntent::Execute`] - check funds and move them now; the
    ///   record is created `accepted`
    /// * [`TransferIntent::Decline`] - record a `rejected` request; no
    ///   funds move
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` - sender (checked first) or receiver unknown
    /// * `SelfTransfer` - sender and receiver are the same account
    /// * `NonPositiveAmount` - `amount` is zero or negative
    /// * `InsufficientFunds` - `Execute` with a sender balance below
    ///   `amount`; no transaction record is created
    pub fn submit(
        &self,
        sender: AccountId,
        receiver: AccountId,
        amount: i64,
        message: &str,
        intent: TransferIntent,
    ) -> Result<Transaction, LedgerError> {
        let mut state = self.state.write();

        let sender_account = state.accounts.get(sender)?;
        state.accounts.get(receiver)?;
        if sender == receiver {
            return Err(LedgerError::self_transfer(sender));
        }
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount });
        }

        let status = match intent {
            TransferIntent::Execute => {
                if sender_account.balance < amount {
                    return Err(LedgerError::insufficient_funds(
                        sender,
                        sender_account.balance,
                        amount,
                    ));
                }
                apply_transfer(&mut state.accounts, sender, receiver, amount)?;
                TransactionStatus::Accepted
            }
            TransferIntent::Request => TransactionStatus::Pending,
            TransferIntent::Decline => TransactionStatus::Rejected,
        };

        let created = state.transactions.create(NewTransaction {
            timestamp: Utc::now(),
            sender,
            receiver,
            amount,
            message: message.to_string(),
            status,
        });
        let id = match created {
            Ok(id) => id,
            Err(err) => {
                // A record that cannot be written must not keep the funds
                if status == TransactionStatus::Accepted {
                    apply_transfer(&mut state.accounts, receiver, sender, amount)?;
                }
                return Err(err);
            }
        };

        match status {
            TransactionStatus::Accepted => {
                info!(transaction = id, sender, receiver, amount, "transfer executed");
            }
            TransactionStatus::Pending => {
                debug!(transaction = id, sender, receiver, amount, "transfer requested");
            }
            TransactionStatus::Rejected => {
                debug!(transaction = id, sender, receiver, "transfer declined at submission");
            }
        }

        state.transactions.get(id)
    }

    /// Resolve a pending transaction
    ///
    /// `accept == false` marks the transaction `rejected`; no funds move.
    /// `accept == true` re-checks the sender's *current* balance, which may
    /// have changed since submission, and on success applies the
    /// debit/credit pair and marks the transaction `accepted`. Exactly one
    /// status transition occurs, and an `accepted` status is indivisible
    /// from its balance movement.
    ///
    /// # Errors
    ///
    /// * `TransactionNotFound` - unknown identifier
    /// * `AlreadyResolved` - the transaction is already terminal; balances
    ///   are untouched
    /// * `InsufficientFunds` - acceptance with a sender balance below the
    ///   transaction amount; the transaction stays `pending` so the caller
    ///   may retry once funds return
    pub fn resolve(
        &self,
        transaction: TransactionId,
        accept: bool,
    ) -> Result<Transaction, LedgerError> {
        let mut state = self.state.write();

        let tx = state.transactions.get(transaction)?;
        if tx.status != TransactionStatus::Pending {
            return Err(LedgerError::already_resolved(transaction, tx.status));
        }

        if !accept {
            state
                .transactions
                .set_status(transaction, TransactionStatus::Rejected, Utc::now())?;
            info!(transaction, "transfer request rejected");
            return state.transactions.get(transaction);
        }

        // Only the current balance decides; the submission-time balance is
        // stale the moment another transfer touches the sender.
        let balance = state.accounts.get(tx.sender)?.balance;
        if balance < tx.amount {
            return Err(LedgerError::insufficient_funds(
                tx.sender, balance, tx.amount,
            ));
        }

        apply_transfer(&mut state.accounts, tx.sender, tx.receiver, tx.amount)?;
        if let Err(err) =
            state
                .transactions
                .set_status(transaction, TransactionStatus::Accepted, Utc::now())
        {
            // A status that cannot be written must not keep the funds
            apply_transfer(&mut state.accounts, tx.receiver, tx.sender, tx.amount)?;
            return Err(err);
        }

        info!(
            transaction,
            sender = tx.sender,
            receiver = tx.receiver,
            amount = tx.amount,
            "transfer request accepted"
        );
        state.transactions.get(transaction)
    }
}

/// Apply the debit/credit pair of a transfer as one unit
///
/// Runs inside the engine's write lock. If the credit is refused, the
/// already-applied debit is restored before the error propagates, so no
/// half-applied transfer is ever left behind.
fn apply_transfer<A: AccountStore>(
    accounts: &mut A,
    sender: AccountId,
    receiver: AccountId,
    amount: i64,
) -> Result<(), LedgerError> {
    accounts.adjust_balance(sender, -amount)?;
    if let Err(err) = accounts.adjust_balance(receiver, amount) {
        accounts.adjust_balance(sender, amount)?;
        return Err(err);
    }
    Ok(())
}
