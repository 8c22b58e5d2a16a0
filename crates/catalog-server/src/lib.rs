//! HTTP surface of the catalog
//!
//! Routes for categories and products sit behind a single failure dispatcher,
//! so every recognized failure leaves the server as an error envelope.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod categories;
mod dispatch;
mod dto;
mod extract;
mod paging;
mod products;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing};
use catalog_config::Config;
use catalog_store::CatalogStore;
use http::StatusCode;
use tower_http::trace::TraceLayer;

use crate::{paging::Paging, state::AppState};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let state = AppState {
            store: Arc::new(CatalogStore::new()),
            paging: Paging::from(&config.catalog),
        };

        let mut app = Router::new()
            .merge(categories::category_router())
            .merge(products::product_router())
            // Failure dispatch, once for every catalog route
            .layer(axum::middleware::from_fn(dispatch::dispatch_failures))
            .with_state(state);

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, routing::get(health_handler));
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
