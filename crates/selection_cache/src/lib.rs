//! SQLite-backed persistence for the selection snapshot.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use selection_core::SelectionCache;
use shared::domain::Employee;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use tracing::warn;

/// Key under which the selection snapshot is stored.
pub const CACHE_KEY: &str = "CACHED_DATA";

#[derive(Clone)]
pub struct SqliteSelectionCache {
    pool: Pool<Sqlite>,
}

impl SqliteSelectionCache {
    /// Opens (or creates) the cache database. Bare file paths are accepted
    /// and normalized to `sqlite://` urls; the parent directory is created
    /// when missing.
    pub async fn new(database_url: &str) -> Result<Self> {
        let database_url = normalize_database_url(database_url);
        ensure_parent_dir_exists(&database_url)?;

        let connect_options =
            SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        let cache = Self { pool };
        cache.ensure_cache_table().await?;
        Ok(cache)
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    async fn ensure_cache_table(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cached_selection (
                cache_key  TEXT PRIMARY KEY,
                payload    TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to ensure cached_selection table exists")?;
        Ok(())
    }
}

#[async_trait]
impl SelectionCache for SqliteSelectionCache {
    async fn read(&self) -> Result<Option<Vec<Employee>>> {
        let row = sqlx::query("SELECT payload FROM cached_selection WHERE cache_key = ?")
            .bind(CACHE_KEY)
            .fetch_optional(&self.pool)
            .await
            .context("failed to read cached selection")?;
        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row.get(0);
        match serde_json::from_str(&payload) {
            Ok(selection) => Ok(Some(selection)),
            Err(err) => {
                warn!("discarding unreadable cached selection: {err}");
                Ok(None)
            }
        }
    }

    async fn write(&self, selection: &[Employee]) -> Result<()> {
        let payload =
            serde_json::to_string(selection).context("failed to encode selection snapshot")?;
        sqlx::query(
            "INSERT INTO cached_selection (cache_key, payload, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(cache_key) DO UPDATE
             SET payload = excluded.payload, updated_at = excluded.updated_at",
        )
        .bind(CACHE_KEY)
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .context("failed to write cached selection")?;
        Ok(())
    }
}

pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() || raw_database_url.starts_with("sqlite::memory:") {
        return "sqlite::memory:".to_string();
    }

    if raw_database_url.starts_with("sqlite://") || raw_database_url.contains("://") {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

fn ensure_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
