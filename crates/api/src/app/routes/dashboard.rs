use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
};
use chrono::Utc;

use corral_dashboard::{RangeQuery, resolve_range, summarize};
use corral_store::Store;

use crate::app::errors;

pub async fn dashboard(
    Extension(store): Extension<Arc<Store>>,
    Query(query): Query<RangeQuery>,
) -> axum::response::Response {
    let entries = match store.ledger_entries() {
        Ok(v) => v,
        Err(e) => return errors::write_error_to_response(e),
    };

    let today = Utc::now().date_naive();
    let range = resolve_range(&query, today);
    Json(summarize(&entries, &range, today)).into_response()
}
