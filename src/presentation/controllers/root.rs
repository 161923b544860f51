//! Root controller

use axum::response::Json;
use serde_json::{Value, json};

/// Static service greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Service greeting", body = Value,
         example = json!({"Hello": "World"}))
    )
)]
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
