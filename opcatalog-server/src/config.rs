// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use anyhow::Result;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Opcatalog Server Configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// HTTP API listen address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_http_addr")]
    pub listen_addr: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Allow credentialed cross-origin requests
    ///
    /// With no explicit origins the request origin is mirrored back, since a
    /// wildcard origin cannot be combined with credentials.
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Gzip responses for clients that accept it
    #[serde(default = "default_enable_compression")]
    pub enable_compression: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Landing page served at `/`
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing filter, used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON log lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

// Default values
fn default_http_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_enable_cors() -> bool {
    true
}

fn default_allow_credentials() -> bool {
    true
}

fn default_enable_compression() -> bool {
    true
}

fn default_index_file() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_log_filter() -> String {
    "opcatalog_server=info,opcatalog_core=info,tower_http=info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_http_addr(),
            request_timeout_secs: default_request_timeout(),
            enable_cors: default_enable_cors(),
            cors_origins: vec![],
            allow_credentials: default_allow_credentials(),
            enable_compression: default_enable_compression(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - OPCATALOG_HTTP_ADDR: HTTP listen address (default: 0.0.0.0:8080)
    /// - OPCATALOG_REQUEST_TIMEOUT: Request timeout in seconds (default: 30)
    /// - OPCATALOG_ENABLE_CORS: Enable CORS (default: true)
    /// - OPCATALOG_CORS_ORIGINS: Comma-separated allowed origins (default: any)
    /// - OPCATALOG_INDEX_FILE: Landing page path (default: index.html)
    /// - OPCATALOG_LOG_JSON: JSON log output (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("OPCATALOG_HTTP_ADDR") {
            config.server.listen_addr = addr;
        }

        if let Ok(timeout) = std::env::var("OPCATALOG_REQUEST_TIMEOUT") {
            if let Ok(val) = timeout.parse() {
                config.server.request_timeout_secs = val;
            }
        }

        if let Ok(cors) = std::env::var("OPCATALOG_ENABLE_CORS") {
            config.server.enable_cors = cors.parse().unwrap_or(true);
        }

        if let Ok(origins) = std::env::var("OPCATALOG_CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Ok(index) = std::env::var("OPCATALOG_INDEX_FILE") {
            config.site.index_file = PathBuf::from(index);
        }

        if let Ok(json) = std::env::var("OPCATALOG_LOG_JSON") {
            config.logging.json = json.parse().unwrap_or(false);
        }

        config
    }

    /// Load configuration with priority: env > file > defaults
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let config = if let Some(path) = config_file {
            if path.exists() {
                Self::from_file(&path)?
            } else {
                anyhow::bail!("Config file not found: {}", path.display());
            }
        } else {
            Self::default()
        };

        Ok(Self::merge_with_env(config))
    }

    /// Merge config with environment variables (env takes priority)
    fn merge_with_env(mut config: Self) -> Self {
        let env_config = Self::from_env();

        // Only override if env var was explicitly set
        if std::env::var("OPCATALOG_HTTP_ADDR").is_ok() {
            config.server.listen_addr = env_config.server.listen_addr;
        }
        if std::env::var("OPCATALOG_REQUEST_TIMEOUT").is_ok() {
            config.server.request_timeout_secs = env_config.server.request_timeout_secs;
        }
        if std::env::var("OPCATALOG_ENABLE_CORS").is_ok() {
            config.server.enable_cors = env_config.server.enable_cors;
        }
        if std::env::var("OPCATALOG_CORS_ORIGINS").is_ok() {
            config.server.cors_origins = env_config.server.cors_origins;
        }
        if std::env::var("OPCATALOG_INDEX_FILE").is_ok() {
            config.site.index_file = env_config.site.index_file;
        }
        if std::env::var("OPCATALOG_LOG_JSON").is_ok() {
            config.logging.json = env_config.logging.json;
        }

        config
    }

    /// Parse listen address as SocketAddr
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server.listen_addr.parse()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }

        for origin in &self.server.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                anyhow::bail!("Invalid CORS origin: {:?}", origin);
            }
        }

        Ok(())
    }
}
