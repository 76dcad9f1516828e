use std::sync::Arc;

use tokio::net::TcpListener;

use velo_store::fixtures::{sample_accounts, sample_store};
use velo_store::{InMemoryAccountStore, InMemoryItemStore, ItemStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Velo item server.
pub struct VeloServer {
    config: ServerConfig,
    state: AppState,
}

impl VeloServer {
    /// Create a server backed by fresh in-memory stores, seeded with the
    /// sample records when the config asks for it.
    pub fn new(config: ServerConfig) -> Self {
        let state = if config.seed_sample_items {
            AppState::with_accounts(Arc::new(sample_store()), Arc::new(sample_accounts()))
        } else {
            AppState::with_accounts(
                Arc::new(InMemoryItemStore::new()),
                Arc::new(InMemoryAccountStore::new()),
            )
        };
        Self { config, state }
    }

    /// Create a server over existing store handles.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn items(&self) -> &Arc<dyn ItemStore> {
        &self.state.items
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("velo server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use velo_types::{ItemId, SessionId, UserId};

    #[test]
    fn server_construction() {
        let server = VeloServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert!(server.items().get_items().unwrap().is_empty());
        assert!(server.state().users.get_user(&UserId::from("user-001")).is_err());
    }

    #[test]
    fn seeded_server_has_sample_items() {
        let config = ServerConfig {
            seed_sample_items: true,
            ..Default::default()
        };
        let server = VeloServer::new(config);
        assert!(server.items().contains(&ItemId::from("item-001")).unwrap());
        assert_eq!(server.items().get_items().unwrap().len(), 2);
        assert!(server.state().users.get_user(&UserId::from("user-001")).is_ok());
        assert!(server
            .state()
            .sessions
            .get_session(&SessionId::from("session-001"))
            .is_ok());
    }

    #[test]
    fn router_builds() {
        let server = VeloServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
