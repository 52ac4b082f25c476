use axum::http::StatusCode;

/// `GET /healthz`: liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: readiness.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
