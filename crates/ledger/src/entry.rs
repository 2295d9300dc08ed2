use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use corral_core::{DomainError, DomainResult, LedgerEntryId, PurchaseId, SaleId};

/// Ledger entry direction: credit = cash in (ingreso), debit = cash out (egreso).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    Credit,
    Debit,
}

impl EntryDirection {
    /// +1 for credits, -1 for debits.
    pub fn sign(self) -> i64 {
        match self {
            EntryDirection::Credit => 1,
            EntryDirection::Debit => -1,
        }
    }
}

/// Back-reference to the aggregate write that produced an entry.
///
/// Audit only; the balance is never recomputed through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum EntrySource {
    Sale(SaleId),
    Purchase(PurchaseId),
}

/// One cash-box movement. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: LedgerEntryId,
    /// Positive amount in cents; the direction carries the sign.
    pub amount: i64,
    pub direction: EntryDirection,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<EntrySource>,
    pub description: String,
}

impl LedgerEntry {
    pub fn new(
        id: LedgerEntryId,
        amount: i64,
        direction: EntryDirection,
        occurred_at: DateTime<Utc>,
        source: Option<EntrySource>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        if amount < 0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(Self {
            id,
            amount,
            direction,
            occurred_at,
            source,
            description: description.into(),
        })
    }

    /// Amount with the direction's sign applied (credits positive).
    pub fn signed_amount(&self) -> i64 {
        self.direction.sign() * self.amount
    }

    pub fn is_credit(&self) -> bool {
        self.direction == EntryDirection::Credit
    }
}

/// Current cash-box balance: signed sum over all entries, credits minus debits.
///
/// Always recomputed from the full entry set; the balance is never a stored
/// counter. Accumulates in i128 so intermediate sums cannot overflow.
pub fn balance(entries: &[LedgerEntry]) -> i64 {
    let total: i128 = entries.iter().map(|e| e.signed_amount() as i128).sum();
    total.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
