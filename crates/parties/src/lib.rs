//! Parties domain module (customers, suppliers, operators).
//!
//! This crate contains the counterparty records a sale or purchase references,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod party;

pub use party::{Customer, CustomerRef, Operator, OperatorRef, Supplier, SupplierRef};
