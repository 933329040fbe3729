use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::github::GithubClient;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::{github_service::GithubCache, runtime};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// GitHub settings from config.toml when present, else from the environment
fn load_github_client() -> GithubClient {
    let gh = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.github,
        Err(_) => {
            let mut gh = configs::GithubConfig::default();
            gh.normalize_from_env();
            gh
        }
    };
    GithubClient::with_api_base(gh.api_base, gh.repo, gh.token)
}

/// Public entry: prepare the store, build the app, run the HTTP server.
/// Any failure before the listener is up is fatal and propagates out.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    runtime::ensure_env("frontend", "data").await?;

    // store bootstrap: open, migrate, seed the counter row
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    models::visit_counter::ensure_counter(&db).await?;

    let github = Arc::new(GithubCache::new(load_github_client()));
    let state = AppState { db, github };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
