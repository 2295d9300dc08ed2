//! Durable state and the invariant-preserving write path.
//!
//! One [`Store`] owns everything the system persists: stock items, parties,
//! sale/purchase headers with their lines, and the append-only cash-box
//! ledger. All mutation goes through the store's scoped transaction: take the
//! write lock, stage changes on a clone of the state, swap the clone in on
//! success or drop it on any failure. Business-rule failures therefore roll
//! the whole aggregate write back, and concurrent writers are serialized, so
//! the classic stock/funds check races cannot occur.

pub mod state;
pub mod writer;

pub use state::{Store, WriteError};
pub use writer::{CreatePurchase, CreateSale};
