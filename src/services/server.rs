use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{AppState, create_router};
use crate::database::{self, DbPool};

/// The squad store service: the account backend for signed-in editors
pub struct ServerService {
    port: u16,
    database_path: String,
    token: String,
}

impl ServerService {
    pub fn new(port: u16, database_path: &str, token: &str) -> Self {
        Self {
            port,
            database_path: database_path.to_string(),
            token: token.to_string(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::create_pool(&self.database_path)?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Squad service listening on {}", addr);

        serve(listener, pool, &self.token).await
    }
}

/// Serve the squad API on an already bound listener until it fails.
pub async fn serve(listener: TcpListener, pool: DbPool, token: &str) -> Result<()> {
    let state = Arc::new(AppState::new(pool, token));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    axum::serve(listener, app)
        .await
        .context("Squad service stopped unexpectedly")
}
