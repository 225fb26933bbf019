use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// All values have sensible defaults; the service needs no secrets.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Hard cap on the outbound page fetch, in seconds. Bounds worst-case
    /// request latency since the fetch is the only suspending stage.
    pub fetch_timeout_secs: u64,
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
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("FETCH_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}
