use super::AlunoRepository;
use crate::error::AppError;
use crate::model::{Aluno, AlunoInput};
use crate::store::ALUNOS_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, nome, cpf, rg";

/// sqlx-backed repository over the `alunos` table. Cloning shares the pool.
#[derive(Clone)]
pub struct PgAlunoRepository {
    pool: PgPool,
}

impl PgAlunoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AlunoRepository for PgAlunoRepository {
    async fn create(&self, input: AlunoInput) -> Result<Aluno, AppError> {
        let sql = format!(
            "INSERT INTO {} (nome, cpf, rg) VALUES ($1, $2, $3) RETURNING {}",
            ALUNOS_TABLE, COLUMNS
        );
        let row = sqlx::query_as::<_, Aluno>(&sql)
            .bind(&input.name)
            .bind(&input.cpf)
            .bind(&input.rg)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Aluno>, AppError> {
        let sql = format!("SELECT {} FROM {}", COLUMNS, ALUNOS_TABLE);
        let rows = sqlx::query_as::<_, Aluno>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ALUNOS_TABLE);
        let row = sqlx::query_as::<_, Aluno>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Vec<Aluno>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE cpf = $1", COLUMNS, ALUNOS_TABLE);
        let rows = sqlx::query_as::<_, Aluno>(&sql)
            .bind(cpf)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, input: AlunoInput) -> Result<Option<Aluno>, AppError> {
        // Single statement: no read-then-write window between concurrent updates.
        let sql = format!(
            "UPDATE {} SET nome = $2, cpf = $3, rg = $4, updated_at = NOW() WHERE id = $1 RETURNING {}",
            ALUNOS_TABLE, COLUMNS
        );
        let row = sqlx::query_as::<_, Aluno>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.cpf)
            .bind(&input.rg)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", ALUNOS_TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
