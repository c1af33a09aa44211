//! Configuration structures.
//!
//! Configuration is layered: defaults, then an optional JSON file, then
//! environment variables, then command-line flags (applied by the binary).

use super::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable names.
pub mod env {
    pub const READONLY: &str = "READONLY";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const ENDPOINT: &str = "CLOUDWATCH_LOGS_ENDPOINT";
    pub const TIMEOUT: &str = "CLOUDWATCH_LOGS_TIMEOUT";
    pub const ERROR_MODE: &str = "CLOUDWATCH_LOGS_MCP_ERROR_MODE";
    pub const LOG_FORMAT: &str = "CLOUDWATCH_LOGS_MCP_LOG_FORMAT";
}

pub const DEFAULT_REGION: &str = "us-east-1";

/// Global server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server identity reported in `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "amazon-cloudwatch-logs-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Remote service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,

    /// Endpoint override (e.g. a local emulator).
    pub endpoint: Option<String>,

    /// Per-request deadline enforced by the HTTP client.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AwsConfig {
    /// Effective endpoint: the override, or the regional default.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://logs.{}.amazonaws.com", self.region),
        }
    }
}

/// How tool failures reach the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Failures become `{isError: true}` tool results.
    #[default]
    Respond,
    /// Failures become JSON-RPC errors.
    Raise,
}

impl std::str::FromStr for ErrorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "respond" => Ok(ErrorMode::Respond),
            "raise" => Ok(ErrorMode::Raise),
            other => Err(Error::config(format!(
                "invalid error mode '{}', expected 'respond' or 'raise'",
                other
            ))),
        }
    }
}

/// Tool exposure settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolsConfig {
    /// Hide and refuse every WRITE tool.
    pub read_only: bool,
    pub error_mode: ErrorMode,
}

/// Stdio transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Longest accepted request line, in bytes.
    pub max_message_bytes: usize,

    /// Bounded channel capacity between request tasks and the writer.
    pub response_channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 5 * 1024 * 1024,
            response_channel_capacity: 64,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Config {
    /// Load a JSON config file. Missing sections take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("invalid config {}: {}", path.display(), e)))
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Overlay values from an environment lookup. Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(env::READONLY) {
            self.tools.read_only = parse_bool(env::READONLY, &v)?;
        }
        if let Some(v) = get(env::AWS_REGION) {
            self.aws.region = v;
        }
        if let Some(v) = get(env::ENDPOINT) {
            self.aws.endpoint = Some(v);
        }
        if let Some(v) = get(env::TIMEOUT) {
            self.aws.request_timeout =
                humantime_serde::deserialize::<Duration, _>(serde_json::Value::String(v))
                    .map_err(|e| Error::config(format!("{}: {}", env::TIMEOUT, e)))?;
        }
        if let Some(v) = get(env::ERROR_MODE) {
            self.tools.error_mode = v.parse()?;
        }
        if let Some(v) = get(env::LOG_FORMAT) {
            self.observability.json_logs = v.eq_ignore_ascii_case("json");
        }
        Ok(())
    }
}

/// Parse `true/false/1/0/yes/no`, case-insensitive.
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::config(format!(
            "{} must be a boolean (true/false/1/0/yes/no), got '{}'",
            name, value
        ))),
    }
}
