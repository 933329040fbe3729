//! Startup directory checks.

use tracing::warn;

/// Make sure the static-asset and data directories are usable before the
/// server starts taking traffic. The data directory must exist because the
/// SQLite file lives there; the frontend directory is only worth a warning.
pub async fn ensure_dirs(frontend_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "static assets directory not found; site pages will 404");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}
