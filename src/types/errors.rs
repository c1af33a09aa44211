//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. The
//! `Display` text of each variant is the detail that follows the
//! `Tool execution failed: ` prefix in tool responses.

use crate::validation::{format_issues, Issue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix shared by every tool failure message.
pub const TOOL_FAILURE_PREFIX: &str = "Tool execution failed: ";

/// Main error enum for the CloudWatch Logs MCP server.
#[derive(Error, Debug)]
pub enum Error {
    /// `tools/call` arrived without an arguments object.
    #[error("Arguments are required for this operation")]
    MissingArguments,

    /// Tool name is not in the callable set (includes write tools in read-only mode).
    #[error("Unknown tool \"{0}\". Please use one of the available tools.")]
    UnknownTool(String),

    /// Arguments failed request-schema validation.
    #[error("Invalid input parameters. {}", format_issues(.0))]
    InvalidInput(Vec<Issue>),

    /// CloudWatch Logs returned a documented service error.
    #[error("Amazon CloudWatch Logs service returned an error. {name}: {message}")]
    Remote { name: String, message: String },

    /// The service response no longer matches the expected response schema.
    #[error("Amazon CloudWatch Logs returned an unexpected response. {}", format_issues(.0))]
    ResponseShape(Vec<Issue>),

    /// Network-level failure talking to the service.
    #[error("transport error: {0}")]
    Transport(String),

    /// No usable AWS credentials.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure category used for logging and transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Input,
    RemoteService,
    ResponseShape,
    Unexpected,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 error codes.
pub mod rpc_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(rpc_codes::PARSE_ERROR, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(rpc_codes::INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            rpc_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(rpc_codes::INVALID_PARAMS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(rpc_codes::INTERNAL_ERROR, message)
    }
}

impl Error {
    /// Classify the error into one of the four failure categories.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingArguments | Error::UnknownTool(_) | Error::InvalidInput(_) => {
                ErrorKind::Input
            }
            Error::Remote { .. } => ErrorKind::RemoteService,
            Error::ResponseShape(_) => ErrorKind::ResponseShape,
            Error::Transport(_)
            | Error::Credentials(_)
            | Error::Config(_)
            | Error::Serialization(_)
            | Error::Io(_)
            | Error::Internal(_) => ErrorKind::Unexpected,
        }
    }

    /// Full user-visible text for a failed tool call.
    pub fn tool_message(&self) -> String {
        format!("{}{}", TOOL_FAILURE_PREFIX, self)
    }

    /// Convert to a JSON-RPC error for the raise propagation strategy.
    pub fn to_rpc_error(&self) -> RpcError {
        match self.kind() {
            ErrorKind::Input => RpcError::invalid_params(self.tool_message()),
            ErrorKind::RemoteService | ErrorKind::ResponseShape | ErrorKind::Unexpected => {
                RpcError::internal(self.tool_message())
            }
        }
    }
}

// Convenience constructors
impl Error {
    pub fn remote(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Issue, IssueCode};

    #[test]
    fn test_unknown_tool_message_names_tool() {
        let err = Error::UnknownTool("not_a_real_tool".to_string());
        assert_eq!(
            err.tool_message(),
            "Tool execution failed: Unknown tool \"not_a_real_tool\". Please use one of the available tools."
        );
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_invalid_input_lists_every_issue() {
        let err = Error::InvalidInput(vec![
            Issue::new(IssueCode::InvalidType, vec!["logGroupName".into()], "Required"),
            Issue::new(
                IssueCode::InvalidType,
                vec!["limit".into()],
                "Expected integer, received string",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid input parameters. [invalid_type] logGroupName: Required; \
             [invalid_type] limit: Expected integer, received string"
        );
    }

    #[test]
    fn test_remote_error_text() {
        let err = Error::remote("ResourceNotFoundException", "The specified log group does not exist.");
        assert_eq!(
            err.tool_message(),
            "Tool execution failed: Amazon CloudWatch Logs service returned an error. \
             ResourceNotFoundException: The specified log group does not exist."
        );
        assert_eq!(err.kind(), ErrorKind::RemoteService);
    }

    #[test]
    fn test_rpc_codes_by_kind() {
        assert_eq!(Error::MissingArguments.to_rpc_error().code, rpc_codes::INVALID_PARAMS);
        assert_eq!(
            Error::remote("ThrottlingException", "Rate exceeded").to_rpc_error().code,
            rpc_codes::INTERNAL_ERROR
        );
        assert_eq!(
            Error::transport("connection reset").to_rpc_error().code,
            rpc_codes::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_rpc_error_message_keeps_prefix() {
        let rpc = Error::MissingArguments.to_rpc_error();
        assert_eq!(
            rpc.message,
            "Tool execution failed: Arguments are required for this operation"
        );
    }
}
