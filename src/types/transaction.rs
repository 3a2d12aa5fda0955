//! Transaction-related types for the ledger
//!
//! This module defines transaction records, the transaction status
//! lifecycle, and the creation-time intent signal.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier
///
/// Assigned on creation, unique and monotonically increasing.
pub type TransactionId = u64;

/// Lifecycle status of a transaction
///
/// A transaction starts `Pending`, `Accepted`, or `Rejected` depending on
/// the submit intent. `Accepted` and `Rejected` are terminal: once a
/// transaction reaches either, its status never changes again. Only a
/// `Pending` transaction may transition, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting the receiver's decision; no funds have moved
    Pending,

    /// The transfer happened; the debit/credit pair has been applied
    Accepted,

    /// The request was declined; no funds moved
    Rejected,
}

impl TransactionStatus {
    /// Whether this status is terminal (never changes again)
    pub fn is_terminal(self) -> bool {
        matches!(self, TransactionStatus::Accepted | TransactionStatus::Rejected)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Accepted => "accepted",
            TransactionStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Creation-time intent for a submitted transfer
///
/// Replaces a nullable "accepted" flag with an explicit three-variant
/// signal, so "not yet decided" and "declined" cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferIntent {
    /// Create a request awaiting the receiver's decision (`pending`)
    Request,

    /// Execute the transfer immediately (`accepted`, funds move now)
    Execute,

    /// Record a declined request (`rejected`, no funds move)
    Decline,
}

/// A stored transaction record
///
/// Relates a sender and a receiver account through an amount and a
/// lifecycle status. Removed only when an endpoint account is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: TransactionId,

    /// Creation time, overwritten with the resolution time when the
    /// transaction is resolved
    pub timestamp: DateTime<Utc>,

    /// The account the funds come from
    pub sender: AccountId,

    /// The account the funds go to
    pub receiver: AccountId,

    /// Transfer amount in minor currency units (strictly positive)
    pub amount: i64,

    /// Free-text note attached by the sender (may be empty)
    pub message: String,

    /// Current lifecycle status
    pub status: TransactionStatus,
}

/// A transaction record before the store has assigned its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Creation time
    pub timestamp: DateTime<Utc>,

    /// The account the funds come from
    pub sender: AccountId,

    /// The account the funds go to
    pub receiver: AccountId,

    /// Transfer amount in minor currency units
    pub amount: i64,

    /// Free-text note attached by the sender
    pub message: String,

    /// Initial lifecycle status
    pub status: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TransactionStatus::Pending, "\"pending\"")]
    #[case(TransactionStatus::Accepted, "\"accepted\"")]
    #[case(TransactionStatus::Rejected, "\"rejected\"")]
    fn test_status_serializes_lowercase(#[case] status: TransactionStatus, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        assert_eq!(serde_json::from_str::<TransactionStatus>(json).unwrap(), status);
    }

    #[rstest]
    #[case(TransactionStatus::Pending, false)]
    #[case(TransactionStatus::Accepted, true)]
    #[case(TransactionStatus::Rejected, true)]
    fn test_terminal_statuses(#[case] status: TransactionStatus, #[case] terminal: bool) {
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn test_status_display_matches_serialized_form() {
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
        assert_eq!(TransactionStatus::Accepted.to_string(), "accepted");
        assert_eq!(TransactionStatus::Rejected.to_string(), "rejected");
    }
}
