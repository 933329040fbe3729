#![cfg(test)]
//! Shared helpers for tests running against throwaway SQLite files.

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use models::{db, visit_counter};

/// Keeps the temp dir alive for as long as the connection is used.
pub struct TestDb {
    pub conn: DatabaseConnection,
    _dir: TempDir,
}

/// Fresh migrated database with the counter row seeded, mirroring what
/// startup does against the real file.
pub async fn fresh_db() -> anyhow::Result<TestDb> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}/test.db?mode=rwc", dir.path().display());
    let conn = db::connect_to(&url).await?;
    migration::Migrator::up(&conn, None).await?;
    visit_counter::ensure_counter(&conn).await?;
    Ok(TestDb { conn, _dir: dir })
}
