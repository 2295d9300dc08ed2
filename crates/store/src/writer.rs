//! Sale/Purchase aggregate writer.
//!
//! Both directions of trade run the same algorithm, parameterized by
//! [`TradeKind`]: validate candidates, then inside one scoped transaction
//! resolve the counterparty, stage every line (checking and adjusting stock),
//! recompute the header total, and append exactly one ledger entry with a
//! back-reference to the header. Any failure rolls the whole write back.

use chrono::{DateTime, Utc};

use corral_core::{
    CustomerId, DomainError, DomainResult, LedgerEntryId, PurchaseId, SaleId, SupplierId,
};
use corral_ledger::{EntrySource, LedgerEntry, balance};
use corral_parties::OperatorRef;
use corral_trading::{
    LineInput, LineItem, PaymentMethod, Purchase, Sale, TradeKind, total_of_inputs,
    validate_candidates,
};

use crate::state::{State, Store, WriteError};

/// Inputs for one sale aggregate write.
#[derive(Debug, Clone)]
pub struct CreateSale {
    pub sale_id: SaleId,
    pub customer_id: CustomerId,
    /// Identity supplied by the authentication collaborator.
    pub operator: OperatorRef,
    pub occurred_at: DateTime<Utc>,
    pub lines: Vec<LineInput>,
}

/// Inputs for one purchase aggregate write.
#[derive(Debug, Clone)]
pub struct CreatePurchase {
    pub purchase_id: PurchaseId,
    pub supplier_id: SupplierId,
    pub payment_method: PaymentMethod,
    pub occurred_at: DateTime<Utc>,
    pub lines: Vec<LineInput>,
}

impl Store {
    /// Create a sale together with its lines, stock decrements and ledger
    /// entry, as one atomic unit.
    ///
    /// Fails with `InsufficientStock` if any line requests more cubetas than
    /// its item holds at check time; on failure nothing changes, not even
    /// lines staged before the failing one.
    pub fn create_sale(&self, cmd: CreateSale) -> Result<Sale, WriteError> {
        let lines = validate_candidates(TradeKind::Sale, &cmd.lines)?;

        let sale = self.transaction(move |state| {
            let customer = state
                .customers
                .get(&cmd.customer_id)
                .ok_or(DomainError::NotFound)?
                .to_ref();

            let staged = stage_lines(state, TradeKind::Sale, &lines)?;
            let sale = Sale::new(cmd.sale_id, customer, cmd.operator, cmd.occurred_at, staged);

            let entry = LedgerEntry::new(
                LedgerEntryId::new(),
                sale.total,
                TradeKind::Sale.entry_direction(),
                cmd.occurred_at,
                Some(EntrySource::Sale(sale.id)),
                sale.ledger_description(),
            )?;
            state.ledger.push(entry);
            state.sales.insert(sale.id, sale.clone());
            Ok(sale)
        })?;

        tracing::info!(sale_id = %sale.id, total = sale.total, "sale committed");
        Ok(sale)
    }

    /// Create a purchase together with its lines, stock increments and ledger
    /// entry, as one atomic unit.
    ///
    /// The funds check runs against the balance inside the same transaction
    /// that appends the debit entry, so it cannot race another writer; it
    /// still fires before any mutation, so a rejected purchase changes
    /// nothing.
    pub fn create_purchase(&self, cmd: CreatePurchase) -> Result<Purchase, WriteError> {
        let lines = validate_candidates(TradeKind::Purchase, &cmd.lines)?;
        let attempted = total_of_inputs(&lines);

        let purchase = self.transaction(move |state| {
            let supplier = state
                .suppliers
                .get(&cmd.supplier_id)
                .ok_or(DomainError::NotFound)?
                .to_ref();

            let available = balance(&state.ledger);
            if attempted > available {
                return Err(DomainError::insufficient_funds(available, attempted));
            }

            let staged = stage_lines(state, TradeKind::Purchase, &lines)?;
            let purchase = Purchase::new(
                cmd.purchase_id,
                supplier,
                cmd.occurred_at,
                cmd.payment_method,
                staged,
            );

            let entry = LedgerEntry::new(
                LedgerEntryId::new(),
                purchase.total,
                TradeKind::Purchase.entry_direction(),
                cmd.occurred_at,
                Some(EntrySource::Purchase(purchase.id)),
                purchase.ledger_description(),
            )?;
            state.ledger.push(entry);
            state.purchases.insert(purchase.id, purchase.clone());
            Ok(purchase)
        })?;

        tracing::info!(purchase_id = %purchase.id, total = purchase.total, "purchase committed");
        Ok(purchase)
    }

    /// Replace a sale's full line set and recompute its total.
    ///
    /// Deliberately does not re-validate stock, re-adjust quantities, or
    /// touch the ledger: header updates are bookkeeping corrections to the
    /// document, not a re-execution of the trade.
    pub fn update_sale_lines(
        &self,
        sale_id: SaleId,
        candidates: &[LineInput],
    ) -> Result<Sale, WriteError> {
        let lines = validate_candidates(TradeKind::Sale, candidates)?;
        self.transaction(move |state| {
            let resolved = resolve_lines(state, &lines)?;
            let sale = state.sales.get_mut(&sale_id).ok_or(DomainError::NotFound)?;
            sale.replace_lines(resolved);
            Ok(sale.clone())
        })
    }

    /// Replace a purchase's full line set and recompute its total.
    ///
    /// Same discipline as [`Store::update_sale_lines`]: no stock or ledger
    /// side effects.
    pub fn update_purchase_lines(
        &self,
        purchase_id: PurchaseId,
        candidates: &[LineInput],
    ) -> Result<Purchase, WriteError> {
        let lines = validate_candidates(TradeKind::Purchase, candidates)?;
        self.transaction(move |state| {
            let resolved = resolve_lines(state, &lines)?;
            let purchase = state
                .purchases
                .get_mut(&purchase_id)
                .ok_or(DomainError::NotFound)?;
            purchase.replace_lines(resolved);
            Ok(purchase.clone())
        })
    }
}

/// Stage validated lines against the state: check availability (sales only),
/// apply the signed stock delta, and snapshot the item label into the line.
fn stage_lines(
    state: &mut State,
    kind: TradeKind,
    lines: &[LineInput],
) -> DomainResult<Vec<LineItem>> {
    let mut staged = Vec::with_capacity(lines.len());
    for input in lines {
        let item = state
            .stock_items
            .get_mut(&input.stock_item_id)
            .ok_or(DomainError::NotFound)?;

        if kind.checks_stock() && !item.covers(input.quantity) {
            return Err(DomainError::insufficient_stock(
                item.label.clone(),
                item.quantity,
                input.quantity,
            ));
        }

        item.adjust(kind.stock_delta(input.quantity))?;
        staged.push(LineItem {
            stock_item_id: input.stock_item_id,
            stock_label: item.label.clone(),
            quantity: input.quantity,
            unit_price: input.unit_price,
        });
    }
    Ok(staged)
}

/// Resolve validated lines into line items without touching stock (updates).
fn resolve_lines(state: &State, lines: &[LineInput]) -> DomainResult<Vec<LineItem>> {
    lines
        .iter()
        .map(|input| {
            let item = state
                .stock_items
                .get(&input.stock_item_id)
                .ok_or(DomainError::NotFound)?;
            Ok(LineItem {
                stock_item_id: input.stock_item_id,
                stock_label: item.label.clone(),
                quantity: input.quantity,
                unit_price: input.unit_price,
            })
        })
        .collect()
}
