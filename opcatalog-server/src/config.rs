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

use anyhow::{Context, Result};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Catalog Server Configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// HTTP API listen address (e.g., "127.0.0.1:8080")
    #[serde(default = "default_listen_addr")]
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
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            request_timeout_secs: default_request_timeout(),
            enable_cors: default_enable_cors(),
            cors_origins: vec![],
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// tracing filter directive; RUST_LOG wins when set
    #[serde(default)]
    pub filter: Option<String>,
}

// Default values
fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_enable_cors() -> bool {
    true
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides on top of `self`
    ///
    /// Supported environment variables:
    /// - OPCATALOG_LISTEN_ADDR: HTTP listen address (default: 127.0.0.1:8080)
    /// - OPCATALOG_REQUEST_TIMEOUT: Request timeout in seconds (default: 30)
    /// - OPCATALOG_ENABLE_CORS: Enable CORS, `true` or `false` (default: true)
    /// - OPCATALOG_CORS_ORIGINS: Comma-separated allowed origins
    /// - OPCATALOG_LOG_FORMAT: `text` or `json`
    /// - OPCATALOG_LOG_FILTER: tracing filter directive
    pub fn merge_with_env(self) -> Result<Self> {
        self.merge_with_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable name
    pub fn merge_with_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("OPCATALOG_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }

        if let Some(timeout) = lookup("OPCATALOG_REQUEST_TIMEOUT") {
            self.server.request_timeout_secs = timeout
                .parse()
                .with_context(|| format!("invalid OPCATALOG_REQUEST_TIMEOUT '{}'", timeout))?;
        }

        if let Some(cors) = lookup("OPCATALOG_ENABLE_CORS") {
            self.server.enable_cors = cors
                .parse()
                .with_context(|| format!("invalid OPCATALOG_ENABLE_CORS '{}'", cors))?;
        }

        if let Some(origins) = lookup("OPCATALOG_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(format) = lookup("OPCATALOG_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        if let Some(filter) = lookup("OPCATALOG_LOG_FILTER") {
            self.logging.filter = Some(filter);
        }

        Ok(self)
    }

    /// Load configuration with priority: env > file > defaults
    ///
    /// A config path that was given but does not exist is an error.
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        config.merge_with_env()
    }

    /// Parse listen address as SocketAddr
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address '{}'", self.server.listen_addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Parsed CORS origins; empty means any origin
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>> {
        self.server
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid CORS origin '{}'", origin))
            })
            .collect()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        self.cors_origins()?;

        Ok(())
    }
}
