use crate::infrastructure::http::middleware::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": state.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
