//! Pieces shared by every response schema.

use super::{optional, required, Field, FieldType, ObjectShape};
use serde::{Deserialize, Serialize};

/// Per-request metadata envelope attached to every service response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cf_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_retry_delay: Option<i64>,
}

pub const METADATA: ObjectShape = ObjectShape::response(&[
    optional(
        "httpStatusCode",
        FieldType::Integer,
        "The status code of the last HTTP response received for this operation.",
    ),
    optional(
        "requestId",
        FieldType::String,
        "A unique identifier for the last request sent for this operation.",
    ),
    optional(
        "extendedRequestId",
        FieldType::String,
        "A secondary identifier for the last request sent. Used for debugging.",
    ),
    optional(
        "cfId",
        FieldType::String,
        "A tertiary identifier for the last request sent. Used for debugging.",
    ),
    optional(
        "attempts",
        FieldType::Integer,
        "The number of times this operation was attempted.",
    ),
    optional(
        "totalRetryDelay",
        FieldType::Integer,
        "The total amount of time (in milliseconds) spent waiting between retry attempts.",
    ),
]);

/// The `$metadata` field every response shape starts with.
pub const METADATA_FIELD: Field = required(
    "$metadata",
    FieldType::Object(&METADATA),
    "Metadata pertaining to this request.",
);

/// Shape of a response that carries nothing but `$metadata`.
pub const EMPTY_RESPONSE: ObjectShape = ObjectShape::response(&[METADATA_FIELD]);

/// Response of operations that return no payload of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
}

// Description texts reused across several shapes.
pub(crate) const EPOCH_MILLIS: &str =
    "Expressed as the number of milliseconds after Jan 1, 1970 00:00:00 UTC.";
pub(crate) const NEXT_TOKEN: &str = "The token for the next set of items to return.";
pub(crate) const LOG_GROUP_NAME: &str = "The name of the log group.";
pub(crate) const LOG_STREAM_NAME: &str = "The name of the log stream.";
