//! API configuration.

use std::path::PathBuf;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Directory holding the collection files.
    pub data_dir: PathBuf,
    /// Shared signing secret for bearer credentials.
    pub token_secret: String,
    /// Allowed CORS origins; `*` means any.
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_dir: PathBuf::from("data"),
            // Development fallback; deployments override via
            // CARELINK_TOKEN_SECRET.
            token_secret: "secreto".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("CARELINK_HOST").unwrap_or(defaults.host),
            port: std::env::var("CARELINK_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: std::env::var("CARELINK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            token_secret: std::env::var("CARELINK_TOKEN_SECRET").unwrap_or(defaults.token_secret),
            cors_origins: std::env::var("CARELINK_CORS_ORIGINS")
                .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
        }
    }
}
