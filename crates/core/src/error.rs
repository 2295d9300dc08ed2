//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, missing references). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed line-item input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A sale line requested more cubetas than the stock item holds.
    #[error("insufficient stock for {item}: available {available} cubetas, requested {requested}")]
    InsufficientStock {
        item: String,
        available: i64,
        requested: i64,
    },

    /// A purchase total exceeds the current cash-box balance (cents).
    #[error("insufficient cash-box balance: balance {balance}, attempted {attempted}")]
    InsufficientFunds { balance: i64, attempted: i64 },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate record).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(item: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            available,
            requested,
        }
    }

    pub fn insufficient_funds(balance: i64, attempted: i64) -> Self {
        Self::InsufficientFunds { balance, attempted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_names_item_and_availability() {
        let err = DomainError::insufficient_stock("Grade A", 10, 15);
        let msg = err.to_string();
        assert!(msg.contains("Grade A"));
        assert!(msg.contains("available 10"));
        assert!(msg.contains("requested 15"));
    }

    #[test]
    fn insufficient_funds_message_carries_balance_and_attempt() {
        let err = DomainError::insufficient_funds(10_000, 15_000);
        let msg = err.to_string();
        assert!(msg.contains("balance 10000"));
        assert!(msg.contains("attempted 15000"));
    }
}
