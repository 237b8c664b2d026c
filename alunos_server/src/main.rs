//! Alunos HTTP server.
//!
//! Run from repo root: `cargo run -p alunos-server`

use alunos_api::{app, connect, logging, AppState, PgAlunoRepository, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    logging::init_tracing();

    let pool = connect(&settings).await?;
    let state = AppState::new(PgAlunoRepository::new(pool));

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
