use axum::http::StatusCode;

/// Health check endpoint to verify service status
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
