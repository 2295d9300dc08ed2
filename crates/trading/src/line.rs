use serde::{Deserialize, Serialize};

use corral_core::{DomainError, DomainResult, StockItemId};

use crate::kind::TradeKind;

/// Persisted line of a sale or purchase.
///
/// Owned exclusively by its parent header; replaced wholesale when the
/// header's line set is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub stock_item_id: StockItemId,
    /// Label snapshot of the stock item at write time.
    pub stock_label: String,
    /// Quantity in cubetas.
    pub quantity: i64,
    /// Unit price per cubeta, in cents.
    pub unit_price: i64,
}

impl LineItem {
    /// Derived: `quantity * unit_price`, in cents.
    ///
    /// Multiplies in i128 and saturates at the i64 bounds; lines that passed
    /// [`validate_candidates`] stay far below the saturation point.
    pub fn subtotal(&self) -> i64 {
        let wide = self.quantity as i128 * self.unit_price as i128;
        wide.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

/// Upper bound on a single line's quantity, in cubetas.
pub const MAX_LINE_QUANTITY: i64 = 1_000_000;

/// Upper bound on a unit price, in cents.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// Upper bound on candidate lines per trade.
///
/// Together with the per-line bounds this keeps every committable total
/// at or below 10^18, inside i64 range.
pub const MAX_LINES: usize = 1_000;

/// Candidate line as submitted by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInput {
    pub stock_item_id: StockItemId,
    pub quantity: i64,
    pub unit_price: i64,
    /// Candidates marked for deletion are skipped, not persisted.
    #[serde(default)]
    pub delete: bool,
}

/// Validate candidate lines for one trade, dropping delete-flagged ones.
///
/// Surfaced to the caller before any transaction opens: a malformed line
/// never reaches the write path. Sales accept a zero price (the price is
/// informational there); purchases require a positive one, since a free
/// purchase line would also defeat the funds check.
pub fn validate_candidates(kind: TradeKind, candidates: &[LineInput]) -> DomainResult<Vec<LineInput>> {
    if candidates.len() > MAX_LINES {
        return Err(DomainError::validation(format!(
            "trade cannot have more than {MAX_LINES} lines"
        )));
    }
    let mut lines = Vec::with_capacity(candidates.len());
    for (idx, line) in candidates.iter().enumerate() {
        if line.delete {
            continue;
        }
        if line.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "line {idx}: quantity must be positive"
            )));
        }
        if line.quantity > MAX_LINE_QUANTITY {
            return Err(DomainError::validation(format!(
                "line {idx}: quantity cannot exceed {MAX_LINE_QUANTITY} cubetas"
            )));
        }
        let price_ok = match kind {
            TradeKind::Sale => line.unit_price >= 0,
            TradeKind::Purchase => line.unit_price > 0,
        };
        if !price_ok {
            return Err(DomainError::validation(format!(
                "line {idx}: unit_price must be positive"
            )));
        }
        if line.unit_price > MAX_UNIT_PRICE {
            return Err(DomainError::validation(format!(
                "line {idx}: unit_price cannot exceed {MAX_UNIT_PRICE} cents"
            )));
        }
        lines.push(line.clone());
    }
    if lines.is_empty() {
        return Err(DomainError::validation("trade must have at least one line"));
    }
    Ok(lines)
}

/// Header total: sum of line subtotals, in cents.
///
/// Accumulates in i128 so a pathological line set cannot overflow mid-sum.
pub fn total_of(lines: &[LineItem]) -> i64 {
    let total: i128 = lines
        .iter()
        .map(|l| l.quantity as i128 * l.unit_price as i128)
        .sum();
    total.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Total a candidate set would commit at, in cents.
///
/// Same arithmetic as [`total_of`], so the pre-transaction funds check and
/// the persisted header total can never disagree.
pub fn total_of_inputs(lines: &[LineInput]) -> i64 {
    let total: i128 = lines
        .iter()
        .map(|l| l.quantity as i128 * l.unit_price as i128)
        .sum();
    total.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
