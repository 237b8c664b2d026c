//! HTTP handlers for student CRUD and the greeting endpoint.

pub mod aluno;
pub mod greeting;
pub use aluno::*;
pub use greeting::*;
