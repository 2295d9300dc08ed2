use serde::{Deserialize, Serialize};

use corral_core::{DomainError, DomainResult, StockItemId};

/// Stock-keeping unit: one egg type and its current stock in cubetas.
///
/// The quantity is only ever mutated through [`StockItem::adjust`], and only
/// from inside an aggregate-write transaction. `adjust` itself does not
/// enforce non-negativity: the aggregate writer owns the stock pre-check, so
/// this type stays callable for both sale decrements and purchase increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    /// Display label, e.g. "Grade A".
    pub label: String,
    /// Current stock in cubetas.
    pub quantity: i64,
}

impl StockItem {
    pub fn new(id: StockItemId, label: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(DomainError::validation("label cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("initial quantity cannot be negative"));
        }
        Ok(Self {
            id,
            label,
            quantity,
        })
    }

    /// Apply a signed delta to the stock quantity.
    ///
    /// Rejects a zero delta (a no-op adjustment is always a caller bug), but
    /// deliberately does not check the resulting sign; the caller validates
    /// availability before a sale-driven decrement. Saturates at the i64
    /// bounds instead of overflowing.
    pub fn adjust(&mut self, delta: i64) -> DomainResult<()> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }
        self.quantity = self.quantity.saturating_add(delta);
        Ok(())
    }

    /// Whether `requested` cubetas can be taken without going negative.
    pub fn covers(&self, requested: i64) -> bool {
        requested <= self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64) -> StockItem {
        StockItem::new(StockItemId::new(), "Grade A", quantity).unwrap()
    }

    #[test]
    fn new_rejects_blank_label_and_negative_stock() {
        assert!(StockItem::new(StockItemId::new(), "  ", 5).is_err());
        assert!(StockItem::new(StockItemId::new(), "Grade A", -1).is_err());
    }

    #[test]
    fn adjust_applies_signed_deltas() {
        let mut it = item(10);
        it.adjust(5).unwrap();
        assert_eq!(it.quantity, 15);
        it.adjust(-12).unwrap();
        assert_eq!(it.quantity, 3);
    }

    #[test]
    fn adjust_rejects_zero_delta() {
        let mut it = item(10);
        let err = it.adjust(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(it.quantity, 10);
    }

    #[test]
    fn adjust_does_not_enforce_non_negativity() {
        // The aggregate writer owns that check; see covers().
        let mut it = item(3);
        it.adjust(-5).unwrap();
        assert_eq!(it.quantity, -2);
    }

    #[test]
    fn adjust_saturates_at_the_numeric_bounds() {
        let mut it = item(i64::MAX);
        it.adjust(5).unwrap();
        assert_eq!(it.quantity, i64::MAX);

        let mut it = item(0);
        it.adjust(i64::MIN).unwrap();
        it.adjust(-1).unwrap();
        assert_eq!(it.quantity, i64::MIN);
    }

    #[test]
    fn covers_is_inclusive() {
        let it = item(10);
        assert!(it.covers(10));
        assert!(!it.covers(11));
    }
}
