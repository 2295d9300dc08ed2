use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use corral_core::StockItemId;
use corral_store::Store;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_stock_item).get(list_stock_items))
        .route("/:id", get(get_stock_item))
        .route("/:id/adjust", post(adjust_stock))
}

pub async fn create_stock_item(
    Extension(store): Extension<Arc<Store>>,
    Json(body): Json<dto::CreateStockItemRequest>,
) -> axum::response::Response {
    match store.create_stock_item(StockItemId::new(), &body.label, body.initial_quantity) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn list_stock_items(
    Extension(store): Extension<Arc<Store>>,
) -> axum::response::Response {
    match store.list_stock_items() {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn adjust_stock(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id: StockItemId = match dto::parse_id(&id, "stock item") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.adjust_stock(id, body.delta) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn get_stock_item(
    Extension(store): Extension<Arc<Store>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: StockItemId = match dto::parse_id(&id, "stock item") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.get_stock_item(id) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}
