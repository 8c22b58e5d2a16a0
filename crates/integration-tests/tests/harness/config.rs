//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use catalog_config::{CatalogConfig, Config, HealthConfig, ServerConfig, TelemetryConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                catalog: CatalogConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Serve health checks on a different path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Change the page size used when a request gives none
    pub fn with_default_page_size(mut self, size: i64) -> Self {
        self.config.catalog.default_page_size = size;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
