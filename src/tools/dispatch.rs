//! Tool dispatcher: lookup, argument validation, invocation, error shaping.
//!
//! The dispatcher is shared by every concurrent request and holds no
//! per-call state. Each call gets its own `tool_call` span with a fresh id.

use super::access::{ToolListing, ToolSet};
use crate::logs::LogsClient;
use crate::types::{Error, ErrorMode, Result};
use crate::validation::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Result of a `tools/call`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Successful result carrying `value` as pretty-printed JSON.
    pub fn success(value: &Value) -> Result<Self> {
        Ok(Self {
            content: vec![ToolContent::Text {
                text: serde_json::to_string_pretty(value)?,
            }],
            is_error: false,
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Text of the first content block.
    pub fn text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}

/// Routes `tools/list` and `tools/call` onto the registry.
pub struct Dispatcher {
    tools: ToolSet,
    client: Arc<dyn LogsClient>,
    error_mode: ErrorMode,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("tools", &self.tools)
            .field("error_mode", &self.error_mode)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(tools: ToolSet, client: Arc<dyn LogsClient>, error_mode: ErrorMode) -> Self {
        Self {
            tools,
            client,
            error_mode,
        }
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// Advertised tools. Never fails.
    pub fn list(&self) -> &[ToolListing] {
        self.tools.listing()
    }

    /// Execute one tool call.
    ///
    /// In [`ErrorMode::Respond`] every failure becomes an `isError` result and
    /// this returns `Ok`. In [`ErrorMode::Raise`] failures are returned as
    /// `Err` for the transport to map.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> Result<ToolResponse> {
        let call_id = Uuid::new_v4();
        let span = tracing::info_span!("tool_call", %call_id, tool = name);

        async {
            let outcome = self
                .run(name, arguments)
                .await
                .and_then(|value| ToolResponse::success(&value));

            match outcome {
                Ok(response) => {
                    tracing::info!("tool call succeeded");
                    Ok(response)
                }
                Err(err) => {
                    tracing::warn!(kind = ?err.kind(), error = %err, "tool call failed");
                    match self.error_mode {
                        ErrorMode::Respond => Ok(ToolResponse::failure(err.tool_message())),
                        ErrorMode::Raise => Err(err),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run(&self, name: &str, arguments: Option<Value>) -> Result<Value> {
        let arguments = arguments.ok_or(Error::MissingArguments)?;
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        let arguments = validate(tool.request_schema, &arguments).map_err(Error::InvalidInput)?;

        (tool.operation)(self.client.as_ref(), arguments).await
    }
}
