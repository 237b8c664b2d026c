use super::AlunoRepository;
use crate::error::AppError;
use crate::model::{Aluno, AlunoInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-process repository with ids assigned from 1, like a serial column.
#[derive(Default)]
pub struct MemoryAlunoRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Aluno>,
}

impl MemoryAlunoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave the map half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl AlunoRepository for MemoryAlunoRepository {
    async fn create(&self, input: AlunoInput) -> Result<Aluno, AppError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let aluno = input.into_aluno(inner.next_id);
        inner.rows.insert(aluno.id, aluno.clone());
        Ok(aluno)
    }

    async fn list(&self) -> Result<Vec<Aluno>, AppError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Vec<Aluno>, AppError> {
        Ok(self
            .lock()
            .rows
            .values()
            .filter(|a| a.cpf == cpf)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, input: AlunoInput) -> Result<Option<Aluno>, AppError> {
        let mut inner = self.lock();
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = input.into_aluno(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, cpf: &str, rg: &str) -> AlunoInput {
        AlunoInput {
            name: name.into(),
            cpf: cpf.into(),
            rg: rg.into(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_and_never_reused() {
        let repo = MemoryAlunoRepository::new();
        let a = repo.create(input("A", "1", "1")).await.unwrap();
        let b = repo.create(input("B", "2", "2")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.create(input("C", "3", "3")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn find_by_cpf_returns_all_matches() {
        let repo = MemoryAlunoRepository::new();
        repo.create(input("A", "111", "1")).await.unwrap();
        repo.create(input("B", "111", "2")).await.unwrap();
        repo.create(input("C", "222", "3")).await.unwrap();
        let found = repo.find_by_cpf("111").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(repo.find_by_cpf("999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let repo = MemoryAlunoRepository::new();
        assert!(repo.update(42, input("X", "", "")).await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_row_reports_false() {
        let repo = MemoryAlunoRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }
}
