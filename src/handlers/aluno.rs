//! Student CRUD handlers. A missing record is not an error: reads answer with a
//! zero-valued student and deletes answer 204 either way.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Aluno, AlunoInput};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// GET /alunos
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Aluno>>, AppError> {
    let rows = state.alunos.list().await?;
    tracing::debug!(count = rows.len(), "listed alunos");
    Ok(Json(rows))
}

/// POST /alunos
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AlunoInput>,
) -> Result<Json<Aluno>, AppError> {
    let aluno = state.alunos.create(input).await?;
    tracing::info!(id = aluno.id, "created aluno");
    Ok(Json(aluno))
}

/// GET /alunos/cpf/:cpf
pub async fn find_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Vec<Aluno>>, AppError> {
    let rows = state.alunos.find_by_cpf(&cpf).await?;
    tracing::debug!(count = rows.len(), "looked up alunos by cpf");
    Ok(Json(rows))
}

/// GET /alunos/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Aluno>, AppError> {
    let id = parse_id(&id_str)?;
    let aluno = state.alunos.find_by_id(id).await?.unwrap_or_default();
    Ok(Json(aluno))
}

/// PATCH /alunos/:id. Overwrites every field; when the id does not exist nothing is
/// stored and the submitted fields are echoed back with id 0.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<AlunoInput>,
) -> Result<Json<Aluno>, AppError> {
    let id = parse_id(&id_str)?;
    let aluno = match state.alunos.update(id, input.clone()).await? {
        Some(aluno) => {
            tracing::info!(id, "updated aluno");
            aluno
        }
        None => {
            tracing::debug!(id, "update on missing aluno");
            input.into_aluno(0)
        }
    };
    Ok(Json(aluno))
}

/// DELETE /alunos/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let removed = state.alunos.delete(id).await?;
    tracing::info!(id, removed, "deleted aluno");
    Ok(StatusCode::NO_CONTENT)
}
