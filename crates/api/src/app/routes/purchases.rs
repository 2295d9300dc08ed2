use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;

use corral_core::PurchaseId;
use corral_reports::{TradeFilter, filter_purchases, purchases_csv};
use corral_store::{CreatePurchase, Store};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_purchase).get(list_purchases))
        .route("/export/csv", get(export_purchases_csv))
        .route("/:id", get(get_purchase))
        .route("/:id/lines", put(update_purchase_lines))
}

pub async fn create_purchase(
    Extension(store): Extension<Arc<Store>>,
    Json(body): Json<dto::CreatePurchaseRequest>,
) -> axum::response::Response {
    let supplier_id = match dto::parse_id(&body.supplier_id, "supplier") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let lines = match dto::parse_lines(body.lines) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let cmd = CreatePurchase {
        purchase_id: PurchaseId::new(),
        supplier_id,
        payment_method: body.payment_method,
        occurred_at: body.occurred_at.unwrap_or_else(Utc::now),
        lines,
    };

    match store.create_purchase(cmd) {
        Ok(purchase) => (StatusCode::CREATED, Json(purchase)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn list_purchases(
    Extension(store): Extension<Arc<Store>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let purchases = match store.list_purchases() {
        Ok(v) => v,
        Err(e) => return errors::write_error_to_response(e),
    };
    let filter = TradeFilter::from_params(
        query.q.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    let visible = filter_purchases(&purchases, &filter);
    let total: i64 = visible.iter().map(|p| p.total).sum();
    Json(serde_json::json!({ "items": visible, "total": total })).into_response()
}

pub async fn export_purchases_csv(
    Extension(store): Extension<Arc<Store>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let purchases = match store.list_purchases() {
        Ok(v) => v,
        Err(e) => return errors::write_error_to_response(e),
    };
    let filter = TradeFilter::from_params(
        query.q.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    match purchases_csv(&filter_purchases(&purchases, &filter)) {
        Ok(export) => dto::csv_response(export),
        Err(e) => {
            tracing::error!(error = %e, "purchases export failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_error", "internal error")
        }
    }
}

pub async fn get_purchase(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: PurchaseId = match dto::parse_id(&id, "purchase") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.get_purchase(id) {
        Ok(purchase) => Json(purchase).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn update_purchase_lines(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateLinesRequest>,
) -> axum::response::Response {
    let id: PurchaseId = match dto::parse_id(&id, "purchase") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let lines = match dto::parse_lines(body.lines) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.update_purchase_lines(id, &lines) {
        Ok(purchase) => Json(purchase).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}
