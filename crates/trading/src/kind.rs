use corral_ledger::EntryDirection;

/// Which direction a trade moves stock and cash.
///
/// Sales and purchases share one aggregate-write algorithm; this enum carries
/// the two points where they differ: the ledger direction of the entry the
/// write appends, and the sign of the stock delta each line applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    /// Stock leaves, cash comes in.
    Sale,
    /// Stock arrives, cash goes out.
    Purchase,
}

impl TradeKind {
    /// Direction of the ledger entry a committed trade appends.
    pub fn entry_direction(self) -> EntryDirection {
        match self {
            TradeKind::Sale => EntryDirection::Credit,
            TradeKind::Purchase => EntryDirection::Debit,
        }
    }

    /// Signed stock delta for a line of `quantity` cubetas.
    pub fn stock_delta(self, quantity: i64) -> i64 {
        match self {
            TradeKind::Sale => -quantity,
            TradeKind::Purchase => quantity,
        }
    }

    /// Whether lines must pass the stock availability check before commit.
    pub fn checks_stock(self) -> bool {
        matches!(self, TradeKind::Sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_decrements_and_credits() {
        assert_eq!(TradeKind::Sale.stock_delta(4), -4);
        assert_eq!(TradeKind::Sale.entry_direction(), EntryDirection::Credit);
        assert!(TradeKind::Sale.checks_stock());
    }

    #[test]
    fn purchase_increments_and_debits() {
        assert_eq!(TradeKind::Purchase.stock_delta(4), 4);
        assert_eq!(TradeKind::Purchase.entry_direction(), EntryDirection::Debit);
        assert!(!TradeKind::Purchase.checks_stock());
    }
}
