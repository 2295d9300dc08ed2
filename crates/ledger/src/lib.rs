//! Cash-box ledger domain module.
//!
//! Immutable ledger entries and the derived balance over them. Pure domain
//! logic only: no IO, no HTTP, no persistence concerns.

pub mod entry;

pub use entry::{EntryDirection, EntrySource, LedgerEntry, balance};
