//! Model Context Protocol over stdio.
//!
//! - **codec**: line framing with a size cap
//! - **protocol**: JSON-RPC envelopes and MCP payloads
//! - **router**: method routing onto the dispatcher
//! - **server**: read loop, per-request tasks, single writer

pub mod codec;
pub mod protocol;
pub mod router;
pub mod server;

pub use protocol::{
    CallToolParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
};
pub use router::Router;
pub use server::McpServer;

use crate::logs::{HttpLogsClient, LogsClient};
use crate::tools::{AccessMode, Dispatcher, ToolSet};
use crate::types::{Config, Result};
use std::sync::Arc;

/// Build a server over an arbitrary client.
pub fn build_server(config: &Config, client: Arc<dyn LogsClient>) -> McpServer {
    let tools = ToolSet::new(AccessMode::from_read_only(config.tools.read_only));
    tracing::info!(
        tools = tools.len(),
        read_only = config.tools.read_only,
        error_mode = ?config.tools.error_mode,
        "tool set ready"
    );
    let dispatcher = Dispatcher::new(tools, client, config.tools.error_mode);
    McpServer::new(Arc::new(dispatcher), &config.app, config.server.clone())
}

/// Build a server talking to CloudWatch Logs with the default credential chain.
pub async fn build_http_server(config: &Config) -> Result<McpServer> {
    let client = HttpLogsClient::load(&config.aws).await?;
    tracing::info!(
        endpoint = %client.endpoint(),
        region = %config.aws.region,
        "CloudWatch Logs client ready"
    );
    Ok(build_server(config, Arc::new(client)))
}
