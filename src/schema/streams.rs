//! Log stream operations: create, describe, delete.

use super::common::{
    EmptyResponse, ResponseMetadata, EMPTY_RESPONSE, EPOCH_MILLIS, LOG_GROUP_NAME,
    LOG_STREAM_NAME, METADATA_FIELD, NEXT_TOKEN,
};
use super::enums::OrderBy;
use super::{optional, required, Field, FieldType, ObjectShape};
use serde::{Deserialize, Serialize};

// =============================================================================
// create_log_stream / delete_log_stream
// =============================================================================

/// Identifies one stream inside one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogStreamRef {
    pub log_group_name: String,
    pub log_stream_name: String,
}

pub type CreateLogStreamRequest = LogStreamRef;
pub type CreateLogStreamResponse = EmptyResponse;
pub type DeleteLogStreamRequest = LogStreamRef;
pub type DeleteLogStreamResponse = EmptyResponse;

const STREAM_REF_FIELDS: &[Field] = &[
    required("logGroupName", FieldType::String, LOG_GROUP_NAME),
    required("logStreamName", FieldType::String, LOG_STREAM_NAME),
];

pub const CREATE_LOG_STREAM_REQUEST: ObjectShape = ObjectShape::request(STREAM_REF_FIELDS);
pub const CREATE_LOG_STREAM_RESPONSE: ObjectShape = EMPTY_RESPONSE;
pub const DELETE_LOG_STREAM_REQUEST: ObjectShape = ObjectShape::request(STREAM_REF_FIELDS);
pub const DELETE_LOG_STREAM_RESPONSE: ObjectShape = EMPTY_RESPONSE;

// =============================================================================
// describe_log_streams
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescribeLogStreamsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStream {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_event_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ingestion_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_sequence_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_bytes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_streams: Option<Vec<LogStream>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

pub const DESCRIBE_LOG_STREAMS_REQUEST: ObjectShape = ObjectShape::request(&[
    optional("logGroupName", FieldType::String, LOG_GROUP_NAME),
    optional(
        "logGroupIdentifier",
        FieldType::String,
        "Specify either the name or ARN of the log group to view.",
    ),
    optional("logStreamNamePrefix", FieldType::String, "The prefix to match."),
    optional(
        "orderBy",
        FieldType::Enum(OrderBy::VALUES),
        "If the value is `LogStreamName`, the results are ordered by log stream name.",
    ),
    optional(
        "descending",
        FieldType::Boolean,
        "If the value is true, results are returned in descending order.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
    optional("limit", FieldType::Integer, "The maximum number of items returned."),
]);

const LOG_STREAM: ObjectShape = ObjectShape::response(&[
    optional("logStreamName", FieldType::String, LOG_STREAM_NAME),
    optional("creationTime", FieldType::Integer, EPOCH_MILLIS),
    optional("firstEventTimestamp", FieldType::Integer, EPOCH_MILLIS),
    optional(
        "lastEventTimestamp",
        FieldType::Integer,
        "The time of the most recent log event in the log stream.",
    ),
    optional("lastIngestionTime", FieldType::Integer, EPOCH_MILLIS),
    optional("uploadSequenceToken", FieldType::String, "The sequence token."),
    optional(
        "arn",
        FieldType::String,
        "The Amazon Resource Name (ARN) of the log stream.",
    ),
    optional("storedBytes", FieldType::Integer, "The number of bytes stored."),
]);

pub const DESCRIBE_LOG_STREAMS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "logStreams",
        FieldType::Array(&FieldType::Object(&LOG_STREAM)),
        "The log streams.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
]);
