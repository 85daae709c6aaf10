pub mod health;
pub mod notify;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
