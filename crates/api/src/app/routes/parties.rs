use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use corral_core::{CustomerId, SupplierId};
use corral_store::Store;

use crate::app::{dto, errors};

pub fn customers_router() -> Router {
    Router::new().route("/", post(create_customer).get(list_customers))
}

pub fn suppliers_router() -> Router {
    Router::new().route("/", post(create_supplier).get(list_suppliers))
}

pub async fn create_customer(
    Extension(store): Extension<Arc<Store>>,
    Json(body): Json<dto::CreatePartyRequest>,
) -> axum::response::Response {
    match store.create_customer(CustomerId::new(), &body.name) {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn list_customers(Extension(store): Extension<Arc<Store>>) -> axum::response::Response {
    match store.list_customers() {
        Ok(customers) => Json(serde_json::json!({ "items": customers })).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn create_supplier(
    Extension(store): Extension<Arc<Store>>,
    Json(body): Json<dto::CreatePartyRequest>,
) -> axum::response::Response {
    match store.create_supplier(SupplierId::new(), &body.name) {
        Ok(supplier) => (StatusCode::CREATED, Json(supplier)).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}

pub async fn list_suppliers(Extension(store): Extension<Arc<Store>>) -> axum::response::Response {
    match store.list_suppliers() {
        Ok(suppliers) => Json(serde_json::json!({ "items": suppliers })).into_response(),
        Err(e) => errors::write_error_to_response(e),
    }
}
