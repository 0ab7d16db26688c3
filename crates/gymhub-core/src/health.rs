use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness probe. The service binds its
/// listener only after the database connection is up, so plain OK suffices.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
