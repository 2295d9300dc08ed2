use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use corral_core::PurchaseId;
use corral_parties::SupplierRef;

use crate::line::{LineItem, total_of};

/// How a purchase was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Credit,
}

impl PaymentMethod {
    /// Human label used in lists and exports.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Credit => "Credit",
        }
    }
}

/// Purchase header with its owned lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub supplier: SupplierRef,
    pub occurred_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    /// Sum of line subtotals, in cents. Derived, persisted for listing.
    pub total: i64,
    pub lines: Vec<LineItem>,
}

impl Purchase {
    pub fn new(
        id: PurchaseId,
        supplier: SupplierRef,
        occurred_at: DateTime<Utc>,
        payment_method: PaymentMethod,
        lines: Vec<LineItem>,
    ) -> Self {
        let total = total_of(&lines);
        Self {
            id,
            supplier,
            occurred_at,
            payment_method,
            total,
            lines,
        }
    }

    /// Replace the full line set and recompute the total.
    pub fn replace_lines(&mut self, lines: Vec<LineItem>) {
        self.total = total_of(&lines);
        self.lines = lines;
    }

    /// Ledger description for the debit entry this purchase produces.
    pub fn ledger_description(&self) -> String {
        format!("Purchase {} - {}", self.id, self.supplier.name)
    }
}
