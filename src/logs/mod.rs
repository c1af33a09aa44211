//! Remote CloudWatch Logs service boundary.
//!
//! Operations talk to the service only through [`LogsClient`], so tests can
//! substitute a stub or a `mockall` mock for the real HTTP client.

mod http;
mod sigv4;

pub use aws_credential_types::provider::SharedCredentialsProvider;
pub use aws_credential_types::Credentials;
pub use http::HttpLogsClient;
pub use sigv4::{hmac_sha256, SigningParams};

use crate::types::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Remote actions of the `Logs_20140328` API used by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
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

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::CreateLogGroup => "CreateLogGroup",
            Action::DescribeLogGroups => "DescribeLogGroups",
            Action::DeleteLogGroup => "DeleteLogGroup",
            Action::CreateLogStream => "CreateLogStream",
            Action::DescribeLogStreams => "DescribeLogStreams",
            Action::DeleteLogStream => "DeleteLogStream",
            Action::PutLogEvents => "PutLogEvents",
            Action::GetLogEvents => "GetLogEvents",
            Action::FilterLogEvents => "FilterLogEvents",
            Action::StartQuery => "StartQuery",
            Action::StopQuery => "StopQuery",
            Action::GetQueryResults => "GetQueryResults",
            Action::DescribeQueries => "DescribeQueries",
        }
    }

    /// Value of the `X-Amz-Target` header for this action.
    pub fn target(self) -> String {
        format!("Logs_20140328.{}", self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues one remote call and returns the raw JSON response.
///
/// Implementations add the `$metadata` envelope to successful responses and
/// report documented service failures as [`crate::Error::Remote`].
#[async_trait]
pub trait LogsClient: Send + Sync {
    async fn send(&self, action: Action, input: Value) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_target_header() {
        assert_eq!(
            Action::DescribeLogGroups.target(),
            "Logs_20140328.DescribeLogGroups"
        );
        assert_eq!(Action::GetQueryResults.to_string(), "GetQueryResults");
    }
}
