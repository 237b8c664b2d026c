use crate::handlers::greeting::greet;
use axum::{routing::get, Router};

/// GET /:name. Static routes such as `/alunos` take precedence over this one.
pub fn greeting_routes() -> Router {
    Router::new().route("/:name", get(greet))
}
