//! HTTP client for the CloudWatch Logs JSON 1.1 protocol.

use super::sigv4::SigningParams;
use super::{Action, LogsClient};
use crate::types::{AwsConfig, Error, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde_json::{json, Map, Value};

const SERVICE: &str = "logs";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// [`LogsClient`] that signs and sends requests with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpLogsClient {
    http: reqwest::Client,
    endpoint: Url,
    region: String,
    credentials: Option<SharedCredentialsProvider>,
}

impl HttpLogsClient {
    /// Create a new client from the `aws` config section.
    ///
    /// Missing credentials are not an error here; each call fails instead.
    pub fn new(config: &AwsConfig, credentials: Option<SharedCredentialsProvider>) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint_url())
            .map_err(|e| Error::config(format!("invalid endpoint: {}", e)))?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            region: config.region.clone(),
            credentials,
        })
    }

    /// Create a client using the AWS default credential chain: environment,
    /// shared profiles, SSO, web identity, then container and instance roles.
    ///
    /// Nothing is resolved here; the chain runs on the first call.
    pub async fn load(config: &AwsConfig) -> Result<Self> {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(config, shared.credentials_provider())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn host_header(&self) -> Result<String> {
        let host = self
            .endpoint
            .host_str()
            .ok_or_else(|| Error::config("endpoint has no host"))?;
        Ok(match self.endpoint.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }
}

#[async_trait]
impl LogsClient for HttpLogsClient {
    async fn send(&self, action: Action, input: Value) -> Result<Value> {
        let provider = self
            .credentials
            .as_ref()
            .ok_or_else(|| Error::credentials("no AWS credentials provider configured"))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|e| Error::credentials(format!("no AWS credentials found: {}", e)))?;

        let body = serde_json::to_vec(&input)?;
        let signer = SigningParams {
            access_key_id: credentials.access_key_id(),
            secret_access_key: credentials.secret_access_key(),
            region: &self.region,
            service: SERVICE,
            time: Utc::now(),
        };

        let mut headers = vec![
            ("host".to_string(), self.host_header()?),
            ("content-type".to_string(), CONTENT_TYPE.to_string()),
            ("x-amz-date".to_string(), signer.amz_date()),
            ("x-amz-target".to_string(), action.target()),
        ];
        if let Some(token) = credentials.session_token() {
            headers.push(("x-amz-security-token".to_string(), token.to_string()));
        }
        let authorization = signer.authorization("POST", self.endpoint.path(), "", &headers, &body)?;

        tracing::debug!(action = %action, bytes = body.len(), "sending request");

        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header("authorization", authorization);
        // reqwest derives Host from the URL.
        for (name, value) in headers.iter().filter(|(name, _)| name != "host") {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let text = response.text().await?;

        if status.is_success() {
            let mut output = parse_body(&text)?;
            if let Value::Object(map) = &mut output {
                map.insert("$metadata".to_string(), metadata(status, &response_headers));
            }
            Ok(output)
        } else {
            let (name, message) = error_details(status, &response_headers, &text);
            tracing::debug!(action = %action, status = status.as_u16(), error = %name, "service error");
            Err(Error::remote(name, message))
        }
    }
}

fn parse_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn metadata(status: StatusCode, headers: &HeaderMap) -> Value {
    let mut meta = Map::new();
    meta.insert("httpStatusCode".into(), json!(status.as_u16()));
    for (key, header) in [
        ("requestId", "x-amzn-requestid"),
        ("extendedRequestId", "x-amz-id-2"),
        ("cfId", "x-amz-cf-id"),
    ] {
        if let Some(value) = header_str(headers, header) {
            meta.insert(key.into(), Value::String(value));
        }
    }
    meta.insert("attempts".into(), json!(1));
    meta.insert("totalRetryDelay".into(), json!(0));
    Value::Object(meta)
}

/// Extract `(name, message)` from a JSON 1.1 error response.
fn error_details(status: StatusCode, headers: &HeaderMap, text: &str) -> (String, String) {
    let body: Value = serde_json::from_str(text).unwrap_or(Value::Null);

    let raw_name = body
        .get("__type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| header_str(headers, "x-amzn-errortype"));
    let name = raw_name
        .as_deref()
        .map(short_error_name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| format!("Http{}Error", status.as_u16()));

    let message = ["message", "Message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    (name, message)
}

/// `com.amazonaws.logs#ResourceNotFoundException:http://...` -> `ResourceNotFoundException`
fn short_error_name(raw: &str) -> String {
    let after_hash = raw.rsplit('#').next().unwrap_or(raw);
    after_hash
        .split(':')
        .next()
        .unwrap_or(after_hash)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::provider::error::CredentialsError;
    use aws_credential_types::provider::future;
    use reqwest::header::HeaderValue;

    /// Provider with nothing to offer, like an empty default chain.
    #[derive(Debug)]
    struct NoCredentials;

    impl ProvideCredentials for NoCredentials {
        fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
        where
            Self: 'a,
        {
            future::ProvideCredentials::ready(Err(CredentialsError::not_loaded("no profile")))
        }
    }

    #[test]
    fn test_short_error_name() {
        assert_eq!(
            short_error_name("com.amazonaws.logs#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(
            short_error_name("ThrottlingException:http://internal.amazon.com/"),
            "ThrottlingException"
        );
        assert_eq!(short_error_name("InvalidParameterException"), "InvalidParameterException");
    }

    #[test]
    fn test_error_details_from_body() {
        let (name, message) = error_details(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            r#"{"__type":"com.amazonaws.logs#ResourceAlreadyExistsException","message":"The specified log group already exists"}"#,
        );
        assert_eq!(name, "ResourceAlreadyExistsException");
        assert_eq!(message, "The specified log group already exists");
    }

    #[test]
    fn test_error_details_from_header_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", HeaderValue::from_static("AccessDeniedException:"));
        let (name, message) = error_details(StatusCode::FORBIDDEN, &headers, "");
        assert_eq!(name, "AccessDeniedException");
        assert_eq!(message, "Forbidden");
    }

    #[test]
    fn test_metadata_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-1"));
        let meta = metadata(StatusCode::OK, &headers);
        assert_eq!(
            meta,
            json!({"httpStatusCode": 200, "requestId": "req-1", "attempts": 1, "totalRetryDelay": 0})
        );
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_body("").unwrap(), json!({}));
        assert_eq!(parse_body("{\"a\":1}").unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_per_call() {
        let client = HttpLogsClient::new(&AwsConfig::default(), None).unwrap();
        let err = client
            .send(Action::DescribeLogGroups, json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Credentials(_)));
    }

    #[tokio::test]
    async fn test_unresolvable_chain_fails_per_call() {
        let provider = SharedCredentialsProvider::new(NoCredentials);
        let client = HttpLogsClient::new(&AwsConfig::default(), Some(provider)).unwrap();
        let err = client
            .send(Action::DescribeLogGroups, json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Credentials(_)), "{err:?}");
    }
}
