use std::{env, net::SocketAddr, path::PathBuf};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{category, todo};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

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

/// Directory holding the served OpenAPI documents. `API_SPECS_DIR` overrides
/// the default `api-specs/` next to the process working directory.
pub fn docs_dir() -> PathBuf {
    env::var("API_SPECS_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("api-specs"))
}

/// Seed both stores with their sample records.
pub fn seeded_state() -> ServerState {
    ServerState {
        todos: todo::seeded_store(),
        categories: category::seeded_store(),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Per-resource in-memory state; discarded on shutdown
    let state = seeded_state();

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors, &docs_dir());

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting todo api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
