use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use corral_core::SaleId;
use corral_parties::{CustomerRef, OperatorRef};

use crate::line::{LineItem, total_of};

/// Sale header with its owned lines.
///
/// The total is never an input: it is always recomputed as the sum of line
/// subtotals at save time, for creates and updates alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub customer: CustomerRef,
    pub operator: OperatorRef,
    pub occurred_at: DateTime<Utc>,
    /// Sum of line subtotals, in cents. Derived, persisted for listing.
    pub total: i64,
    pub lines: Vec<LineItem>,
}

impl Sale {
    pub fn new(
        id: SaleId,
        customer: CustomerRef,
        operator: OperatorRef,
        occurred_at: DateTime<Utc>,
        lines: Vec<LineItem>,
    ) -> Self {
        let total = total_of(&lines);
        Self {
            id,
            customer,
            operator,
            occurred_at,
            total,
            lines,
        }
    }

    /// Replace the full line set and recompute the total.
    ///
    /// Deliberately touches neither stock nor the ledger; see the writer's
    /// update operations for the rationale.
    pub fn replace_lines(&mut self, lines: Vec<LineItem>) {
        self.total = total_of(&lines);
        self.lines = lines;
    }

    /// Ledger description for the credit entry this sale produces.
    pub fn ledger_description(&self) -> String {
        format!("Sale {} - {}", self.id, self.customer.name)
    }
}
