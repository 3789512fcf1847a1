use std::sync::Arc;

use fma_ledger::ProgressionService;
use fma_store::{InMemoryRecordStore, RecordStore};
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::{build_router, build_router_with_cors};

/// Progression API server.
pub struct FmaServer {
    config: AppConfig,
    service: ProgressionService,
}

impl FmaServer {
    /// Server backed by a fresh in-memory store.
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryRecordStore::new()))
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let service = ProgressionService::new(store, config.engine(), config.service.clone());
        Self { config, service }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn service(&self) -> &ProgressionService {
        &self.service
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let state = AppState::new(self.service.clone());
        if self.config.server.permissive_cors {
            build_router_with_cors(state)
        } else {
            build_router(state)
        }
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.server.bind_addr).await?;
        tracing::info!(
            addr = %self.config.server.bind_addr,
            enforce_unlocks = self.config.service.enforce_unlocks,
            "Factory Method Adventures API listening"
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn server_construction() {
        let server = FmaServer::new(AppConfig::default());
        assert_eq!(
            server.config().server.bind_addr,
            "127.0.0.1:3001".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(server.service().engine().catalog().units().len(), 11);
    }

    #[test]
    fn router_builds_with_and_without_cors() {
        let _with = FmaServer::new(AppConfig::default()).router();
        let mut config = AppConfig::default();
        config.server.permissive_cors = false;
        let _without = FmaServer::new(config).router();
    }
}
