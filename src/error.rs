//! Startup error taxonomy for the server binary.

use std::net::SocketAddr;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// `[[workspace.metadata.leptos]]` / `LEPTOS_*` settings could not be read.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
