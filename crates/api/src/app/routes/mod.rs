use axum::{Router, routing::get};

pub mod dashboard;
pub mod inventory;
pub mod parties;
pub mod purchases;
pub mod sales;
pub mod system;

/// Router for all operator-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/stock-items", inventory::router())
        .nest("/customers", parties::customers_router())
        .nest("/suppliers", parties::suppliers_router())
        .nest("/sales", sales::router())
        .nest("/purchases", purchases::router())
        .route("/dashboard", get(dashboard::dashboard))
}
