use std::time::Duration;

use tokio::net::TcpListener;

use jcmp_sdk::Comparator;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::{build_router, AppState};

/// The jcmp comparison server.
pub struct CompareServer {
    config: ServerConfig,
}

impl CompareServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let comparator =
            Comparator::with_timeout(Duration::from_secs(self.config.fetch_timeout_secs));
        build_router(AppState {
            comparator,
            config: self.config.clone(),
        })
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("jcmp server listening on {}", self.config.bind_addr);
        Ok(axum::serve(listener, app).await?)
    }
}
