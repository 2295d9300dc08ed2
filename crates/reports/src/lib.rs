//! Reporting boundary: list filtering and export-data assembly.
//!
//! Filters reproduce the list views' matching rules; exports produce the
//! data the external Reporting/Export collaborator consumes (CSV bytes with
//! a suggested filename, and the invoice document for PDF rendering).

pub mod export;
pub mod filter;
pub mod invoice;

pub use export::{CsvExport, ExportError, purchases_csv, sales_csv};
pub use filter::{TradeFilter, filter_purchases, filter_sales};
pub use invoice::{InvoiceDocument, InvoiceLine, invoice_for_sale};
