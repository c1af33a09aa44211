//! Tool registry: the closed set of tool names and their static definitions.
//!
//! The table is built once from an exhaustive `match` over [`ToolName`], so a
//! new name cannot compile without a definition. There is no registration API.

use crate::logs::LogsClient;
use crate::operations::{self, Operation};
use crate::schema::ObjectShape;
use crate::types::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;

// =============================================================================
// Tool names
// =============================================================================

/// Every tool this server can expose, in advertised order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    CreateLogGroup,
    DescribeLogGroups,
    DeleteLogGroup,
    CreateLogStream,
    DescribeLogStreams,
    DeleteLogStream,
    PutLogEvents,
    GetLogEvents,
    FilterLogEvents,
    StartQuery,
    StopQuery,
    GetQueryResults,
    DescribeQueries,
}

impl ToolName {
    pub const ALL: [ToolName; 13] = [
        ToolName::CreateLogGroup,
        ToolName::DescribeLogGroups,
        ToolName::DeleteLogGroup,
        ToolName::CreateLogStream,
        ToolName::DescribeLogStreams,
        ToolName::DeleteLogStream,
        ToolName::PutLogEvents,
        ToolName::GetLogEvents,
        ToolName::FilterLogEvents,
        ToolName::StartQuery,
        ToolName::StopQuery,
        ToolName::GetQueryResults,
        ToolName::DescribeQueries,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::CreateLogGroup => "create_log_group",
            ToolName::DescribeLogGroups => "describe_log_groups",
            ToolName::DeleteLogGroup => "delete_log_group",
            ToolName::CreateLogStream => "create_log_stream",
            ToolName::DescribeLogStreams => "describe_log_streams",
            ToolName::DeleteLogStream => "delete_log_stream",
            ToolName::PutLogEvents => "put_log_events",
            ToolName::GetLogEvents => "get_log_events",
            ToolName::FilterLogEvents => "filter_log_events",
            ToolName::StartQuery => "start_query",
            ToolName::StopQuery => "stop_query",
            ToolName::GetQueryResults => "get_query_results",
            ToolName::DescribeQueries => "describe_queries",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tool definitions
// =============================================================================

/// Whether a tool mutates remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Read,
    Write,
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Untyped operation entry point bound into the registry.
pub type OperationFn = for<'a> fn(&'a dyn LogsClient, Value) -> BoxFuture<'a, Result<Value>>;

fn invoke<O: Operation>(client: &dyn LogsClient, input: Value) -> BoxFuture<'_, Result<Value>> {
    Box::pin(operations::call::<O>(client, input))
}

/// Static definition of one tool.
pub struct ToolDefinition {
    pub name: ToolName,
    pub description: &'static str,
    /// JSON Schema (draft-07) advertised in `tools/list`.
    pub input_schema: Value,
    pub request_schema: &'static ObjectShape,
    pub operation: OperationFn,
    pub operation_type: OperationType,
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("operation_type", &self.operation_type)
            .finish_non_exhaustive()
    }
}

impl ToolDefinition {
    fn of<O: Operation>(
        name: ToolName,
        description: &'static str,
        operation_type: OperationType,
    ) -> Self {
        Self {
            name,
            description,
            input_schema: O::REQUEST.to_json_schema(),
            request_schema: O::REQUEST,
            operation: invoke::<O>,
            operation_type,
        }
    }

    pub fn is_write(&self) -> bool {
        self.operation_type == OperationType::Write
    }
}

fn definition(name: ToolName) -> ToolDefinition {
    use operations::*;
    use OperationType::{Read, Write};

    match name {
        ToolName::CreateLogGroup => ToolDefinition::of::<CreateLogGroup>(
            name,
            "Create a new Amazon CloudWatch Logs log group",
            Write,
        ),
        ToolName::DescribeLogGroups => ToolDefinition::of::<DescribeLogGroups>(
            name,
            "List and describe Amazon CloudWatch Logs log groups",
            Read,
        ),
        ToolName::DeleteLogGroup => ToolDefinition::of::<DeleteLogGroup>(
            name,
            "Delete an Amazon CloudWatch Logs log group",
            Write,
        ),
        ToolName::CreateLogStream => ToolDefinition::of::<CreateLogStream>(
            name,
            "Create a new log stream in an Amazon CloudWatch Logs log group",
            Write,
        ),
        ToolName::DescribeLogStreams => ToolDefinition::of::<DescribeLogStreams>(
            name,
            "List and describe log streams in an Amazon CloudWatch Logs log group",
            Read,
        ),
        ToolName::DeleteLogStream => ToolDefinition::of::<DeleteLogStream>(
            name,
            "Delete a log stream in an Amazon CloudWatch Logs log group",
            Write,
        ),
        ToolName::PutLogEvents => ToolDefinition::of::<PutLogEvents>(
            name,
            "Write log events to a specified log stream in Amazon CloudWatch Logs",
            Write,
        ),
        ToolName::GetLogEvents => ToolDefinition::of::<GetLogEvents>(
            name,
            "Retrieve log events from a specified log stream in Amazon CloudWatch Logs",
            Read,
        ),
        ToolName::FilterLogEvents => ToolDefinition::of::<FilterLogEvents>(
            name,
            "Search log events across the log streams of an Amazon CloudWatch Logs log group",
            Read,
        ),
        // Query lifecycle calls change no stored log data.
        ToolName::StartQuery => ToolDefinition::of::<StartQuery>(
            name,
            "Start an Amazon CloudWatch Logs Insights query",
            Read,
        ),
        ToolName::StopQuery => ToolDefinition::of::<StopQuery>(
            name,
            "Stop a running Amazon CloudWatch Logs Insights query",
            Read,
        ),
        ToolName::GetQueryResults => ToolDefinition::of::<GetQueryResults>(
            name,
            "Retrieve the results of an Amazon CloudWatch Logs Insights query",
            Read,
        ),
        ToolName::DescribeQueries => ToolDefinition::of::<DescribeQueries>(
            name,
            "List recent Amazon CloudWatch Logs Insights queries",
            Read,
        ),
    }
}

static REGISTRY: OnceLock<Vec<ToolDefinition>> = OnceLock::new();

/// The full registry, in [`ToolName::ALL`] order.
pub fn registry() -> &'static [ToolDefinition] {
    REGISTRY.get_or_init(|| ToolName::ALL.into_iter().map(definition).collect())
}

/// Definition for one tool.
pub fn lookup(name: ToolName) -> &'static ToolDefinition {
    &registry()[name as usize]
}
