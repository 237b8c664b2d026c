//! Database bootstrap: create the database if missing, open the pool, ensure the `alunos` table.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgConnection, PgPool};
use std::str::FromStr;

pub const ALUNOS_TABLE: &str = "alunos";

/// Open the shared pool described by `settings`, creating the database first when
/// `settings.create_database` is set, and make sure the student table exists.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    if settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_student_table(&pool).await?;
    Ok(pool)
}

/// Idempotent; safe to run on every startup.
pub async fn ensure_student_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            nome TEXT NOT NULL DEFAULT '',
            cpf TEXT NOT NULL DEFAULT '',
            rg TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        ALUNOS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS {}_cpf_idx ON {} (cpf)",
        ALUNOS_TABLE, ALUNOS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    tracing::info!(table = ALUNOS_TABLE, "student table ready");
    Ok(())
}

/// Connects to the `postgres` maintenance database on the same server and runs
/// `CREATE DATABASE` when the target is missing. No-op when the URL already points at `postgres`.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = admin_options(&admin_url)?.connect().await?;
    if database_exists(&mut conn, &db_name).await? {
        tracing::debug!(database = %db_name, "database already present");
        return Ok(());
    }
    tracing::info!(database = %db_name, "creating database");
    sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
        .execute(&mut conn)
        .await?;
    Ok(())
}

async fn database_exists(conn: &mut PgConnection, name: &str) -> Result<bool, AppError> {
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(name)
        .fetch_one(conn)
        .await?;
    Ok(exists)
}

fn invalid_database_url(reason: impl Into<String>) -> AppError {
    ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: reason.into(),
    }
    .into()
}

fn admin_options(admin_url: &str) -> Result<PgConnectOptions, AppError> {
    PgConnectOptions::from_str(admin_url).map_err(|e| invalid_database_url(e.to_string()))
}

/// Split a connection URL into the URL of the `postgres` maintenance database
/// (query string kept) and the target database name.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| invalid_database_url("no database path"))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
