use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use corral_core::StockItemId;
use corral_trading::{LineInput, PaymentMethod};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateStockItemRequest {
    pub label: String,
    #[serde(default)]
    pub initial_quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePartyRequest {
    pub name: String,
}

/// One candidate line as submitted over the wire.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    pub stock_item_id: String,
    pub quantity: i64,
    pub unit_price: i64,
    #[serde(default)]
    pub delete: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub customer_id: String,
    /// Defaults to now when absent.
    pub occurred_at: Option<DateTime<Utc>>,
    pub lines: Vec<LineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    pub supplier_id: String,
    pub payment_method: PaymentMethod,
    pub occurred_at: Option<DateTime<Utc>>,
    pub lines: Vec<LineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLinesRequest {
    pub lines: Vec<LineRequest>,
}

/// Query parameters shared by the list and export endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// -------------------------
// Mapping helpers
// -------------------------

/// Parse wire lines into candidate line inputs, rejecting malformed ids.
pub fn parse_lines(lines: Vec<LineRequest>) -> Result<Vec<LineInput>, axum::response::Response> {
    lines
        .into_iter()
        .map(|line| {
            let stock_item_id: StockItemId = line.stock_item_id.parse().map_err(|_| {
                errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid stock item id")
            })?;
            Ok(LineInput {
                stock_item_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
                delete: line.delete,
            })
        })
        .collect()
}

/// Wrap CSV bytes in a download response.
pub fn csv_response(export: corral_reports::CsvExport) -> axum::response::Response {
    use axum::http::header;
    use axum::response::IntoResponse;
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.bytes,
    )
        .into_response()
}

/// Parse a path or body id, mapping failures to a 400.
pub fn parse_id<T>(raw: &str, what: &'static str) -> Result<T, axum::response::Response>
where
    T: std::str::FromStr,
{
    raw.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid {what} id"),
        )
    })
}
