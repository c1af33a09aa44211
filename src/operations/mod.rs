//! Operation functions.
//!
//! Every remote operation runs the same pipeline:
//! validate input -> send exactly the validated fields -> validate the raw
//! response -> return the normalized response. No retries happen here.

use crate::logs::{Action, LogsClient};
use crate::schema::ObjectShape;
use crate::types::{Error, Result};
use crate::validation::validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Binding between a remote action, its typed contract and its shapes.
pub trait Operation: Send + Sync + 'static {
    type Request: Serialize + DeserializeOwned + Send + Sync;
    type Response: Serialize + DeserializeOwned + Send;

    const ACTION: Action;
    const REQUEST: &'static ObjectShape;
    const RESPONSE: &'static ObjectShape;
}

/// Run an operation on untyped JSON, returning the normalized response.
pub async fn call<O: Operation>(client: &dyn LogsClient, input: Value) -> Result<Value> {
    let input = validate(O::REQUEST, &input).map_err(Error::InvalidInput)?;

    tracing::debug!(action = %O::ACTION, "calling remote action");
    let raw = client.send(O::ACTION, input).await?;

    validate(O::RESPONSE, &raw).map_err(|issues| {
        tracing::warn!(action = %O::ACTION, issues = issues.len(), "response shape drift");
        Error::ResponseShape(issues)
    })
}

/// Run an operation with its typed request and response.
pub async fn execute<O: Operation>(
    client: &dyn LogsClient,
    request: &O::Request,
) -> Result<O::Response> {
    let input = serde_json::to_value(request)?;
    let output = call::<O>(client, input).await?;
    Ok(serde_json::from_value(output)?)
}

/// Declare an operation marker type and its typed entry point.
macro_rules! operation {
    (
        $(#[$meta:meta])*
        $name:ident => $func:ident($req:ty) -> $resp:ty,
        request: $request_shape:path,
        response: $response_shape:path $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::operations::Operation for $name {
            type Request = $req;
            type Response = $resp;

            const ACTION: $crate::logs::Action = $crate::logs::Action::$name;
            const REQUEST: &'static $crate::schema::ObjectShape = &$request_shape;
            const RESPONSE: &'static $crate::schema::ObjectShape = &$response_shape;
        }

        $(#[$meta])*
        pub async fn $func(
            client: &dyn $crate::logs::LogsClient,
            request: &$req,
        ) -> $crate::types::Result<$resp> {
            $crate::operations::execute::<$name>(client, request).await
        }
    };
}

pub mod events;
pub mod groups;
pub mod insights;
pub mod streams;

pub use events::{FilterLogEvents, GetLogEvents, PutLogEvents};
pub use groups::{CreateLogGroup, DeleteLogGroup, DescribeLogGroups};
pub use insights::{DescribeQueries, GetQueryResults, StartQuery, StopQuery};
pub use streams::{CreateLogStream, DeleteLogStream, DescribeLogStreams};

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Client that records requests and replies with a canned result.
    pub struct StubClient {
        reply: Mutex<Option<Result<Value>>>,
        pub sent: Mutex<Vec<(Action, Value)>>,
    }

    impl StubClient {
        pub fn replying(reply: Result<Value>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LogsClient for StubClient {
        async fn send(&self, action: Action, input: Value) -> Result<Value> {
            self.sent.lock().unwrap().push((action, input));
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(Error::internal("stub already used")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubClient;
    use super::*;
    use crate::schema::groups::{CreateLogGroupRequest, DescribeLogGroupsRequest};
    use serde_json::json;

    #[tokio::test]
    async fn test_call_sends_only_validated_fields() {
        let stub = StubClient::replying(Ok(json!({"$metadata": {"httpStatusCode": 200}})));
        let out = call::<CreateLogGroup>(&stub, json!({"logGroupName": "app"}))
            .await
            .unwrap();
        assert_eq!(out, json!({"$metadata": {"httpStatusCode": 200}}));

        let sent = stub.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Action::CreateLogGroup);
        assert_eq!(sent[0].1, json!({"logGroupName": "app"}));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_client() {
        let stub = StubClient::replying(Ok(json!({"$metadata": {}})));
        let err = call::<CreateLogGroup>(&stub, json!({})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(stub.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_response_drift_is_reported() {
        let stub = StubClient::replying(Ok(json!({
            "$metadata": {},
            "logGroups": [{"logGroupClass": "GLACIER"}]
        })));
        let err = call::<DescribeLogGroups>(&stub, json!({})).await.unwrap_err();
        match err {
            Error::ResponseShape(issues) => {
                assert_eq!(issues[0].dotted_path(), "logGroups.0.logGroupClass")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_error_propagates_unchanged() {
        let stub = StubClient::replying(Err(Error::remote(
            "ResourceNotFoundException",
            "The specified log group does not exist.",
        )));
        let err = groups::delete_log_group(
            &stub,
            &crate::schema::groups::DeleteLogGroupRequest {
                log_group_name: "missing".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Remote { ref name, .. } if name == "ResourceNotFoundException"));
    }

    #[tokio::test]
    async fn test_typed_execute() {
        let stub = StubClient::replying(Ok(json!({
            "$metadata": {"httpStatusCode": 200},
            "logGroups": [{"logGroupName": "app", "storedBytes": 10}],
            "nextToken": "t"
        })));
        let request = DescribeLogGroupsRequest {
            log_group_name_prefix: Some("a".into()),
            ..Default::default()
        };
        let response = groups::describe_log_groups(&stub, &request).await.unwrap();
        assert_eq!(response.metadata.http_status_code, Some(200));
        assert_eq!(response.next_token.as_deref(), Some("t"));
        assert_eq!(
            stub.sent.lock().unwrap()[0].1,
            json!({"logGroupNamePrefix": "a"})
        );

        let stub = StubClient::replying(Ok(json!({"$metadata": {}})));
        let request = CreateLogGroupRequest {
            log_group_name: "app".into(),
            ..Default::default()
        };
        assert!(groups::create_log_group(&stub, &request).await.is_ok());
    }
}
