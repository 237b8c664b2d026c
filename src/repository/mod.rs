//! Datastore seam for students. Handlers only see `dyn AlunoRepository`.

mod memory;
mod postgres;

pub use memory::MemoryAlunoRepository;
pub use postgres::PgAlunoRepository;

use crate::error::AppError;
use crate::model::{Aluno, AlunoInput};
use async_trait::async_trait;

#[async_trait]
pub trait AlunoRepository: Send + Sync {
    /// Insert a new student; the datastore assigns the id.
    async fn create(&self, input: AlunoInput) -> Result<Aluno, AppError>;

    /// Every student, in whatever order the datastore yields them.
    async fn list(&self) -> Result<Vec<Aluno>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError>;

    /// Exact match on cpf. Cpf is not unique, so this may return several rows.
    async fn find_by_cpf(&self, cpf: &str) -> Result<Vec<Aluno>, AppError>;

    /// Overwrite name, cpf and rg of the student with `id`. `None` when no such row.
    async fn update(&self, id: i64, input: AlunoInput) -> Result<Option<Aluno>, AppError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
