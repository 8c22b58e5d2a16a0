#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use catalog::*;
pub use health::*;
pub use server::*;
pub use telemetry::{ExportProtocol, ExporterConfig, TelemetryConfig, TracingConfig};

/// Top-level catalog service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog API behavior
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging and OTLP export
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
