use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;

use corral_core::SaleId;
use corral_reports::{TradeFilter, filter_sales, invoice_for_sale, sales_csv};
use corral_store::{CreateSale, Store};

use crate::app::{dto, errors};
use crate::context::OperatorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_sale).get(list_sales))
        .route("/export/csv", get(export_sales_csv))
        .route("/:id", get(get_sale))
        .route("/:id/lines", put(update_sale_lines))
        .route("/:id/invoice", get(sale_invoice))
}

pub async fn create_sale(
    Extension(store): Extension<Arc<Store>>,
    Extension(operator): Extension<OperatorContext>,
    Json(body): Json<dto::CreateSaleRequest>,
) -> axum::response::Response {
    let customer_id = match dto::parse_id(&body.customer_id, "customer") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let lines = match dto::parse_lines(body.lines) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let cmd = CreateSale {
        sale_id: SaleId::new(),
        customer_id,
        operator: operator.operator().clone(),
        occurred_at: body.occurred_at.unwrap_or_else(Utc::now),
        lines,
    };

    match store.create_sale(cmd) {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn list_sales(
    Extension(store): Extension<Arc<Store>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let sales = match store.list_sales() {
        Ok(v) => v,
        Err(e) => return errors::write_error_to_response(e),
    };
    let filter = TradeFilter::from_params(
        query.q.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    let visible = filter_sales(&sales, &filter);
    let total: i64 = visible.iter().map(|s| s.total).sum();
    Json(serde_json::json!({ "items": visible, "total": total })).into_response()
}

pub async fn export_sales_csv(
    Extension(store): Extension<Arc<Store>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let sales = match store.list_sales() {
        Ok(v) => v,
        Err(e) => return errors::write_error_to_response(e),
    };
    let filter = TradeFilter::from_params(
        query.q.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    match sales_csv(&filter_sales(&sales, &filter)) {
        Ok(export) => dto::csv_response(export),
        Err(e) => {
            tracing::error!(error = %e, "sales export failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_error", "internal error")
        }
    }
}

pub async fn get_sale(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SaleId = match dto::parse_id(&id, "sale") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.get_sale(id) {
        Ok(sale) => Json(sale).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn update_sale_lines(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateLinesRequest>,
) -> axum::response::Response {
    let id: SaleId = match dto::parse_id(&id, "sale") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let lines = match dto::parse_lines(body.lines) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.update_sale_lines(id, &lines) {
        Ok(sale) => Json(sale).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn sale_invoice(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SaleId = match dto::parse_id(&id, "sale") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.get_sale(id) {
        Ok(sale) => Json(invoice_for_sale(&sale)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}
