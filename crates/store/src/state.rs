use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use corral_core::{
    CustomerId, DomainError, PurchaseId, SaleId, StockItemId, SupplierId,
};
use corral_inventory::StockItem;
use corral_ledger::{LedgerEntry, balance};
use corral_parties::{Customer, Supplier};
use corral_trading::{Purchase, Sale};

/// Failure of a store operation.
///
/// Business-rule failures keep their domain shape; infrastructure failures
/// (lock poisoning) collapse into the generic `Storage` variant and surface
/// to users as a generic failure, never retried automatically.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Everything the system persists, as one clonable value.
///
/// Cloning the whole state per write is what makes the scoped transaction
/// trivial; at this system's scale that cost is acceptable.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    pub(crate) stock_items: HashMap<StockItemId, StockItem>,
    pub(crate) customers: HashMap<CustomerId, Customer>,
    pub(crate) suppliers: HashMap<SupplierId, Supplier>,
    pub(crate) sales: HashMap<SaleId, Sale>,
    pub(crate) purchases: HashMap<PurchaseId, Purchase>,
    /// Append-only; entries are immutable once pushed.
    pub(crate) ledger: Vec<LedgerEntry>,
}

/// Single-process store with scoped-transaction writes.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<State>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read-only closure against a consistent snapshot of the state.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&State) -> R) -> Result<R, WriteError> {
        let guard = self
            .state
            .read()
            .map_err(|_| WriteError::Storage("lock poisoned".to_string()))?;
        Ok(f(&guard))
    }

    /// Scoped transaction: stage mutations on a clone of the state, swap the
    /// clone in on success, drop it on any failure.
    ///
    /// Holding the write lock for the whole closure serializes aggregate
    /// writes; checks made inside the closure (stock, funds) cannot race
    /// another writer.
    pub(crate) fn transaction<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, DomainError>,
    ) -> Result<T, WriteError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| WriteError::Storage("lock poisoned".to_string()))?;

        let mut staged = guard.clone();
        let out = f(&mut staged)?;
        *guard = staged;
        Ok(out)
    }

    // ---- inventory store ----

    /// Create a stock item. Labels are unique.
    pub fn create_stock_item(
        &self,
        id: StockItemId,
        label: &str,
        initial_quantity: i64,
    ) -> Result<StockItem, WriteError> {
        let item = StockItem::new(id, label, initial_quantity)?;
        self.transaction(move |state| {
            if state.stock_items.values().any(|i| i.label == item.label) {
                return Err(DomainError::conflict("stock item label already exists"));
            }
            state.stock_items.insert(item.id, item.clone());
            Ok(item)
        })
    }

    pub fn get_stock_item(&self, id: StockItemId) -> Result<StockItem, WriteError> {
        self.read(|state| state.stock_items.get(&id).cloned())?
            .ok_or(WriteError::Domain(DomainError::NotFound))
    }

    /// Current stock quantity of one item, in cubetas.
    pub fn quantity_of(&self, id: StockItemId) -> Result<i64, WriteError> {
        Ok(self.get_stock_item(id)?.quantity)
    }

    /// Apply a signed delta to one item's stock and persist it.
    ///
    /// No non-negativity check here; the aggregate writer owns the pre-check
    /// for sale-driven decrements. Direct corrections through this operation
    /// may take the quantity wherever the caller asks.
    pub fn adjust_stock(&self, id: StockItemId, delta: i64) -> Result<StockItem, WriteError> {
        self.transaction(move |state| {
            let item = state.stock_items.get_mut(&id).ok_or(DomainError::NotFound)?;
            item.adjust(delta)?;
            Ok(item.clone())
        })
    }

    pub fn list_stock_items(&self) -> Result<Vec<StockItem>, WriteError> {
        self.read(|state| {
            let mut items: Vec<StockItem> = state.stock_items.values().cloned().collect();
            items.sort_by(|a, b| a.label.cmp(&b.label));
            items
        })
    }

    // ---- parties ----

    pub fn create_customer(&self, id: CustomerId, name: &str) -> Result<Customer, WriteError> {
        let customer = Customer::new(id, name)?;
        self.transaction(move |state| {
            state.customers.insert(customer.id, customer.clone());
            Ok(customer)
        })
    }

    pub fn create_supplier(&self, id: SupplierId, name: &str) -> Result<Supplier, WriteError> {
        let supplier = Supplier::new(id, name)?;
        self.transaction(move |state| {
            state.suppliers.insert(supplier.id, supplier.clone());
            Ok(supplier)
        })
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, WriteError> {
        self.read(|state| {
            let mut customers: Vec<Customer> = state.customers.values().cloned().collect();
            customers.sort_by(|a, b| a.name.cmp(&b.name));
            customers
        })
    }

    pub fn list_suppliers(&self) -> Result<Vec<Supplier>, WriteError> {
        self.read(|state| {
            let mut suppliers: Vec<Supplier> = state.suppliers.values().cloned().collect();
            suppliers.sort_by(|a, b| a.name.cmp(&b.name));
            suppliers
        })
    }

    // ---- headers ----

    pub fn get_sale(&self, id: SaleId) -> Result<Sale, WriteError> {
        self.read(|state| state.sales.get(&id).cloned())?
            .ok_or(WriteError::Domain(DomainError::NotFound))
    }

    pub fn get_purchase(&self, id: PurchaseId) -> Result<Purchase, WriteError> {
        self.read(|state| state.purchases.get(&id).cloned())?
            .ok_or(WriteError::Domain(DomainError::NotFound))
    }

    pub fn list_sales(&self) -> Result<Vec<Sale>, WriteError> {
        self.read(|state| state.sales.values().cloned().collect())
    }

    pub fn list_purchases(&self) -> Result<Vec<Purchase>, WriteError> {
        self.read(|state| state.purchases.values().cloned().collect())
    }

    // ---- ledger store ----

    /// Append one entry. Pure insert, no business validation; trades append
    /// their entries inside the aggregate write instead of through this.
    pub fn append_entry(&self, entry: LedgerEntry) -> Result<(), WriteError> {
        self.transaction(move |state| {
            state.ledger.push(entry);
            Ok(())
        })
    }

    /// Snapshot of all ledger entries, in append order.
    pub fn ledger_entries(&self) -> Result<Vec<LedgerEntry>, WriteError> {
        self.read(|state| state.ledger.clone())
    }

    /// Current cash-box balance: recomputed from the full entry set on every
    /// call, never cached.
    pub fn current_balance(&self) -> Result<i64, WriteError> {
        self.read(|state| balance(&state.ledger))
    }
}
