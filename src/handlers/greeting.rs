use axum::{extract::Path, Json};
use serde_json::{json, Value};

/// Key of the single field in the greeting body.
pub const GREETING_LABEL: &str = "API diz:";

pub fn greeting_text(name: &str) -> String {
    format!("E ai {}, tudo beleza?", name)
}

/// GET /:name
pub async fn greet(Path(name): Path<String>) -> Json<Value> {
    Json(json!({ GREETING_LABEL: greeting_text(&name) }))
}
