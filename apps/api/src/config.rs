use anyhow::{Context, Result};

const DEFAULT_CATALOG_VERSION: &str = "2024.1";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Reported by the catalog endpoint so cached designs can be traced to
    /// the organism set they were composed from.
    pub catalog_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_version: std::env::var("DESIGN_CATALOG_VERSION")
                .unwrap_or_else(|_| DEFAULT_CATALOG_VERSION.to_string()),
        })
    }
}
