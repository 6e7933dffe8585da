//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{http::HttpConfig, logging::LoggingConfig};

pub(crate) mod http;
pub(crate) mod logging;

/// eshop Web Server configuration
#[derive(Debug, Parser)]
#[command(name = "eshop-web", about = "eshop Product Catalog Server", long_about = None)]
pub struct ServerConfig {
    /// HTTP listener settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.http.socket_addr()
    }
}
