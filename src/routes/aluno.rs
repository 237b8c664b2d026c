use crate::handlers::aluno::{create, delete as delete_handler, find_by_cpf, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn aluno_routes(state: AppState) -> Router {
    Router::new()
        .route("/alunos", get(list).post(create))
        .route("/alunos/cpf/:cpf", get(find_by_cpf))
        .route("/alunos/:id", get(read).patch(update).delete(delete_handler))
        .with_state(state)
}
