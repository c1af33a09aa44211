//! Method routing.
//!
//! Maps one decoded JSON-RPC message onto the dispatcher and builds the
//! response. Notifications are acknowledged in the log only.

use super::protocol::{methods, CallToolParams, InitializeResult, JsonRpcRequest, JsonRpcResponse};
use crate::tools::Dispatcher;
use crate::types::{AppConfig, RpcError};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug)]
pub struct Router {
    dispatcher: Arc<Dispatcher>,
    initialize: InitializeResult,
}

impl Router {
    pub fn new(dispatcher: Arc<Dispatcher>, app: &AppConfig) -> Self {
        Self {
            dispatcher,
            initialize: InitializeResult::new(app),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle one raw line. `None` means nothing is written back.
    pub async fn handle_line(&self, line: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparsable message");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(format!("Parse error: {}", e)),
                ));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => id.map(|id| {
                JsonRpcResponse::failure(id, RpcError::invalid_request(format!("Invalid request: {}", e)))
            }),
        }
    }

    /// Handle one decoded request.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        };
        if id.is_null() {
            tracing::warn!(method = %request.method, "request with null id");
            return Some(JsonRpcResponse::failure(
                Value::Null,
                RpcError::invalid_request("Invalid request: id must not be null"),
            ));
        }

        let outcome = match request.method.as_str() {
            methods::INITIALIZE => {
                tracing::info!("client initialized session");
                serde_json::to_value(&self.initialize).map_err(|e| RpcError::internal(e.to_string()))
            }
            methods::PING => Ok(json!({})),
            methods::TOOLS_LIST => Ok(json!({ "tools": self.dispatcher.list() })),
            methods::TOOLS_CALL => self.call_tool(request.params).await,
            other => {
                tracing::debug!(method = other, "unknown method");
                Err(RpcError::method_not_found(other))
            }
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| RpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p)
                    .map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))
            })?;

        let response = self
            .dispatcher
            .call(&params.name, params.arguments)
            .await
            .map_err(|err| err.to_rpc_error())?;

        serde_json::to_value(&response).map_err(|e| RpcError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::testing::StubClient;
    use crate::tools::{AccessMode, ToolSet};
    use crate::types::{rpc_codes, ErrorMode};

    fn router(mode: AccessMode, error_mode: ErrorMode) -> Router {
        let dispatcher = Dispatcher::new(
            ToolSet::new(mode),
            Arc::new(StubClient::replying(Ok(json!({})))),
            error_mode,
        );
        Router::new(Arc::new(dispatcher), &AppConfig::default())
    }

    #[tokio::test]
    async fn test_parse_error_has_null_id() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Respond);
        let response = r.handle_line(b"{not json").await.unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, rpc_codes::PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Respond);
        let line = br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(r.handle_line(line).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Respond);
        let response = r
            .handle(JsonRpcRequest::new(7, "resources/list", None))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, rpc_codes::METHOD_NOT_FOUND);
        assert_eq!(error.message, "Method not found: resources/list");
    }

    #[tokio::test]
    async fn test_tools_list_respects_read_only() {
        let r = router(AccessMode::ReadOnly, ErrorMode::Respond);
        let response = r
            .handle(JsonRpcRequest::new(1, "tools/list", None))
            .await
            .unwrap();
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 8);
        assert!(tools.iter().all(|t| t["name"] != "put_log_events"));
    }

    #[tokio::test]
    async fn test_bad_call_params() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Respond);
        let response = r
            .handle(JsonRpcRequest::new(2, "tools/call", Some(json!({"arguments": {}}))))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, rpc_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_raise_mode_maps_to_rpc_error() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Raise);
        let response = r
            .handle(JsonRpcRequest::new(
                3,
                "tools/call",
                Some(json!({"name": "create_log_group", "arguments": {}})),
            ))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, rpc_codes::INVALID_PARAMS);
        assert!(error.message.starts_with("Tool execution failed: Invalid input parameters."));
        assert!(error.message.contains("logGroupName"));
    }

    #[tokio::test]
    async fn test_null_id_is_invalid_request() {
        let r = router(AccessMode::ReadWrite, ErrorMode::Respond);
        let line = br#"{"jsonrpc":"2.0","id":null,"method":"tools/call","params":{"name":"describe_queries","arguments":{}}}"#;
        let response = r.handle_line(line).await.unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, rpc_codes::INVALID_REQUEST);
    }
}
