use axum::Json;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

pub async fn health_check() -> Json<Value> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(json!({
        "status": "healthy",
        "service": "sunward-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": timestamp,
    }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Sunward Solar & Infrastructure API"
    }))
}
