use axum::{http::StatusCode, response::IntoResponse};

pub async fn health() -> impl IntoResponse {
    "ok"
}

/// Stand-in for the reply generator; only here so a browser has something to call.
pub async fn generate(body: String) -> impl IntoResponse {
    if body.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "empty email content".to_string());
    }
    (StatusCode::OK, format!("received {} bytes", body.len()))
}
