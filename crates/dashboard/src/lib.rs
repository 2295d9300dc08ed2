//! Dashboard aggregation: date-range resolution and cash-box summaries.
//!
//! Pure functions over ledger entry slices. "Today" is always a parameter so
//! callers control the clock and tests stay deterministic.

pub mod range;
pub mod summary;

pub use range::{RangeQuery, ResolvedRange, resolve_range};
pub use summary::{DailyFlow, DashboardSummary, SERIES_DAYS, summarize};
