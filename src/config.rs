// =============================================================================
// Service Configuration — JSON file plus environment overrides
// =============================================================================
//
// Every field carries a serde default so a partial (or absent) config file
// still yields a usable configuration. Environment variables win over the
// file:
//
//   STOCKS_BIND_ADDR       full listen address, e.g. 127.0.0.1:8080
//   PORT                   listen port on 0.0.0.0 (ignored if STOCKS_BIND_ADDR)
//   STOCKS_UPSTREAM_URL    provider base URL, ticker is appended as a segment
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "stock_stats.json";

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_upstream_base_url() -> String {
    "http://20.244.56.144/evaluation-service/stocks".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the price-history provider (no trailing slash needed).
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upstream_base_url: default_upstream_base_url(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        info!(path = %path.display(), "service config loaded");
        Ok(config)
    }

    /// File (if present) then process environment.
    pub fn from_env() -> Self {
        let path = std::env::var("STOCKS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

        let mut config = if Path::new(&path).exists() {
            Self::load(&path).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            })
        } else {
            warn!(path = %path, "Config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config
    }

    /// Apply overrides from `lookup` (normally `std::env::var`). Blank values
    /// are treated as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(addr) = get("STOCKS_BIND_ADDR") {
            self.bind_addr = addr;
        } else if let Some(port) = get("PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.bind_addr = format!("0.0.0.0:{port}");
        }

        if let Some(url) = get("STOCKS_UPSTREAM_URL") {
            self.upstream_base_url = url;
        }

        self.upstream_base_url = self.upstream_base_url.trim_end_matches('/').to_string();
    }
}
