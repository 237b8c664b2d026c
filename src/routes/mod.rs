//! Router assembly.

mod aluno;
mod greeting;

pub use aluno::aluno_routes;
pub use greeting::greeting_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: student CRUD, greeting, request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(aluno_routes(state))
        .merge(greeting_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
