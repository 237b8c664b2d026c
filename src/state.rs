//! Shared application state for all routes.

use crate::repository::AlunoRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub alunos: Arc<dyn AlunoRepository>,
}

impl AppState {
    pub fn new<R>(alunos: R) -> Self
    where
        R: AlunoRepository + 'static,
    {
        Self {
            alunos: Arc::new(alunos),
        }
    }
}
