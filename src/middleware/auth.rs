use axum::extract::Request;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::LabError;

/// The single shared credential the gate admits. Compared verbatim: no scheme
/// case-folding, no trimming.
pub const EXPECTED_AUTHORIZATION: &str = "Bearer valid_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Reject,
}

/// Decide whether a request may reach a protected handler.
pub fn authorize(headers: &HeaderMap) -> GateDecision {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return GateDecision::Reject;
    };
    if bool::from(value.as_bytes().ct_eq(EXPECTED_AUTHORIZATION.as_bytes())) {
        GateDecision::Allow
    } else {
        GateDecision::Reject
    }
}

pub fn ensure_authorized(headers: &HeaderMap) -> Result<(), LabError> {
    match authorize(headers) {
        GateDecision::Allow => Ok(()),
        GateDecision::Reject => Err(LabError::Unauthorized),
    }
}

/// Route layer: rejected requests never reach the wrapped handler.
pub async fn require_bearer(req: Request, next: Next) -> Response {
    if let Err(e) = ensure_authorized(req.headers()) {
        warn!(path = %req.uri().path(), "rejected request without valid bearer token");
        return e.into_response();
    }
    next.run(req).await
}
