//! Configuration loading from environment.

use std::env;

use cotacao_upstream::AWESOMEAPI_URL;

/// Application configuration.
///
/// Every value has a default matching the service's fixed contract, so a bare
/// `cotacao-server` run needs no environment at all.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream_url: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to the
    /// built-in defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cotacoes.db?mode=rwc".to_string());

        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| AWESOMEAPI_URL.to_string());

        Ok(Self {
            port,
            database_url,
            upstream_url,
        })
    }
}
