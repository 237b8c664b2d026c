//! Alunos API: CRUD REST service for students backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Aluno, AlunoInput};
pub use repository::{AlunoRepository, MemoryAlunoRepository, PgAlunoRepository};
pub use routes::{aluno_routes, app, greeting_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_student_table};
