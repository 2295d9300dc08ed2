//! Trading domain module: sale and purchase aggregates.
//!
//! Headers, line items, and the candidate-line validation shared by both
//! directions of trade. The sale and purchase write paths are one algorithm
//! parameterized by [`TradeKind`] (ledger direction + stock-delta sign);
//! orchestration against the stores lives in `corral-store`.

pub mod kind;
pub mod line;
pub mod purchase;
pub mod sale;

pub use kind::TradeKind;
pub use line::{
    LineInput, LineItem, MAX_LINE_QUANTITY, MAX_LINES, MAX_UNIT_PRICE, total_of, total_of_inputs,
    validate_candidates,
};
pub use purchase::{PaymentMethod, Purchase};
pub use sale::Sale;
