use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Catalog manager API
#[derive(Debug, Parser)]
#[command(name = "catalog", about = "HTTP API for managing product categories and products")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "catalog.toml", env = "CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CATALOG_LISTEN")]
    pub listen: Option<SocketAddr>,
}
