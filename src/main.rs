//! CloudWatch Logs MCP server - stdio entry point.
//!
//! Reads JSON-RPC requests from stdin, writes responses to stdout, and logs
//! to stderr. Settings layer as defaults, `--config` file, environment, then
//! flags.

use clap::{Parser, ValueEnum};
use cloudwatch_logs_mcp::types::ErrorMode;
use cloudwatch_logs_mcp::Config;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "MCP server exposing Amazon CloudWatch Logs as tools")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hide and refuse every tool that modifies CloudWatch Logs
    #[arg(long)]
    read_only: bool,

    /// AWS region
    #[arg(long)]
    region: Option<String>,

    /// Endpoint override (e.g. a local emulator)
    #[arg(long)]
    endpoint: Option<String>,

    /// Per-request timeout, e.g. `10s`
    #[arg(long, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// How tool failures are reported: respond | raise
    #[arg(long)]
    error_mode: Option<ErrorMode>,

    /// Log output format on stderr
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    humantime_serde::deserialize(serde_json::Value::String(value.to_string()))
        .map_err(|e: serde_json::Error| e.to_string())
}

impl Args {
    fn load_config(&self) -> cloudwatch_logs_mcp::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;

        if self.read_only {
            config.tools.read_only = true;
        }
        if let Some(region) = &self.region {
            config.aws.region = region.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.aws.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = self.timeout {
            config.aws.request_timeout = timeout;
        }
        if let Some(mode) = self.error_mode {
            config.tools.error_mode = mode;
        }
        if let Some(format) = self.log_format {
            config.observability.json_logs = matches!(format, LogFormat::Json);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.load_config()?;

    cloudwatch_logs_mcp::observability::init_tracing(config.observability.json_logs);

    let server = cloudwatch_logs_mcp::mcp::build_http_server(&config).await?;
    tracing::info!(
        "{} {} starting (read_only={})",
        config.app.name,
        config.app.version,
        config.tools.read_only,
    );

    let cancel = server.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            cancel.cancel();
        }
    });

    let code = match server.serve_stdio().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("server failed: {}", e);
            1
        }
    };
    tracing::info!("server stopped");
    // A pending blocking stdin read keeps the runtime from shutting down.
    std::process::exit(code);
}
