use axum::response::Json;
use serde_json::{Value, json};

/// Lets a user check in the browser that the callback server is listening.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "waiting for authorization",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
