//! Core types shared across the server.
//!
//! - **Errors**: application error type, failure categories, JSON-RPC error mapping
//! - **Config**: layered configuration (defaults, file, environment)

mod config;
mod errors;

pub use config::{
    env, parse_bool, AppConfig, AwsConfig, Config, ErrorMode, ObservabilityConfig, ServerConfig,
    ToolsConfig, DEFAULT_REGION,
};
pub use errors::{rpc_codes, Error, ErrorKind, Result, RpcError, TOOL_FAILURE_PREFIX};
