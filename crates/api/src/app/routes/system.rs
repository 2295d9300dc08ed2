use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    Extension(operator): Extension<crate::context::OperatorContext>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "operator_id": operator.operator().id.to_string(),
        "username": operator.operator().username,
    }))
}
