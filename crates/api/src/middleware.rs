use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use corral_core::OperatorId;
use corral_parties::OperatorRef;

use crate::context::OperatorContext;

/// Header carrying the operator's id, set by the authentication collaborator.
pub const OPERATOR_ID_HEADER: &str = "x-operator-id";
/// Header carrying the operator's username.
pub const OPERATOR_NAME_HEADER: &str = "x-operator-name";

/// Attach the operator identity to the request, or reject it.
///
/// Credentials are never validated here; the upstream authentication
/// collaborator already did that and forwards the identity as headers.
pub async fn operator_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let operator = extract_operator(req.headers())?;
    req.extensions_mut().insert(OperatorContext::new(operator));
    Ok(next.run(req).await)
}

fn extract_operator(headers: &HeaderMap) -> Result<OperatorRef, StatusCode> {
    let id = headers
        .get(OPERATOR_ID_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_str()
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let id: OperatorId = id.parse().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let username = headers
        .get(OPERATOR_NAME_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_str()
        .map_err(|_| StatusCode::UNAUTHORIZED)?
        .trim();
    if username.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(OperatorRef {
        id,
        username: username.to_string(),
    })
}
