//! Log event operations: put, get, filter.

use super::common::{
    ResponseMetadata, EPOCH_MILLIS, LOG_GROUP_NAME, LOG_STREAM_NAME, METADATA_FIELD, NEXT_TOKEN,
};
use super::enums::EntityRejectionErrorType;
use super::{optional, required, FieldType, ObjectShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const UNMASK: &str =
    "Specify true to display the log event fields with all sensitive data unmasked and visible.";

// =============================================================================
// put_log_events
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputLogEvent {
    pub timestamp: i64,
    pub message: String,
}

/// Entity the written events are associated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_attributes: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PutLogEventsRequest {
    pub log_group_name: String,
    pub log_stream_name: String,
    pub log_events: Vec<InputLogEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLogEventsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub too_new_log_event_start_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub too_old_log_event_end_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_log_event_end_index: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedEntityInfo {
    pub error_type: EntityRejectionErrorType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_sequence_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_entity_info: Option<RejectedEntityInfo>,
}

const INPUT_LOG_EVENT: ObjectShape = ObjectShape::request(&[
    required(
        "timestamp",
        FieldType::Integer,
        "The time the event occurred, expressed as the number of milliseconds after Jan 1, 1970 00:00:00 UTC.",
    ),
    required("message", FieldType::String, "The raw event message."),
]);

const ENTITY: ObjectShape = ObjectShape::request(&[
    optional(
        "keyAttributes",
        FieldType::Map(&FieldType::String),
        "The attributes of the entity which identify the specific entity, as a list of key-value pairs.",
    ),
    optional(
        "attributes",
        FieldType::Map(&FieldType::String),
        "Additional attributes of the entity that are not used to specify the identity of the entity.",
    ),
]);

pub const PUT_LOG_EVENTS_REQUEST: ObjectShape = ObjectShape::request(&[
    required("logGroupName", FieldType::String, LOG_GROUP_NAME),
    required("logStreamName", FieldType::String, LOG_STREAM_NAME),
    required(
        "logEvents",
        FieldType::Array(&FieldType::Object(&INPUT_LOG_EVENT)),
        "The log events.",
    ),
    optional(
        "sequenceToken",
        FieldType::String,
        "The sequence token obtained from the response of the previous `PutLogEvents` call.",
    ),
    optional(
        "entity",
        FieldType::Object(&ENTITY),
        "The entity associated with the log events.",
    ),
]);

const REJECTED_LOG_EVENTS_INFO: ObjectShape = ObjectShape::response(&[
    optional(
        "tooNewLogEventStartIndex",
        FieldType::Integer,
        "The index of the first log event that is too new.",
    ),
    optional(
        "tooOldLogEventEndIndex",
        FieldType::Integer,
        "The index of the last log event that is too old.",
    ),
    optional(
        "expiredLogEventEndIndex",
        FieldType::Integer,
        "The expired log events.",
    ),
]);

const REJECTED_ENTITY_INFO: ObjectShape = ObjectShape::response(&[required(
    "errorType",
    FieldType::Enum(EntityRejectionErrorType::VALUES),
    "The type of error that caused the rejection of the entity.",
)]);

pub const PUT_LOG_EVENTS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional("nextSequenceToken", FieldType::String, "The next sequence token."),
    optional(
        "rejectedLogEventsInfo",
        FieldType::Object(&REJECTED_LOG_EVENTS_INFO),
        "The rejected events.",
    ),
    optional(
        "rejectedEntityInfo",
        FieldType::Object(&REJECTED_ENTITY_INFO),
        "Information about why the entity is rejected.",
    ),
]);

// =============================================================================
// get_log_events
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetLogEventsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_identifier: Option<String>,
    pub log_stream_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from_head: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmask: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputLogEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogEventsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<OutputLogEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_forward_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_backward_token: Option<String>,
}

pub const GET_LOG_EVENTS_REQUEST: ObjectShape = ObjectShape::request(&[
    optional("logGroupName", FieldType::String, LOG_GROUP_NAME),
    optional(
        "logGroupIdentifier",
        FieldType::String,
        "Specify either the name or ARN of the log group to view events from.",
    ),
    required("logStreamName", FieldType::String, LOG_STREAM_NAME),
    optional("startTime", FieldType::Integer, EPOCH_MILLIS),
    optional("endTime", FieldType::Integer, EPOCH_MILLIS),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
    optional("limit", FieldType::Integer, "The maximum number of log events returned."),
    optional(
        "startFromHead",
        FieldType::Boolean,
        "If the value is true, the earliest log events are returned first. If the value is false, the latest log events are returned first.",
    ),
    optional("unmask", FieldType::Boolean, UNMASK),
]);

const OUTPUT_LOG_EVENT: ObjectShape = ObjectShape::response(&[
    optional("timestamp", FieldType::Integer, EPOCH_MILLIS),
    optional("message", FieldType::String, "The data contained in the log event."),
    optional("ingestionTime", FieldType::Integer, EPOCH_MILLIS),
]);

pub const GET_LOG_EVENTS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "events",
        FieldType::Array(&FieldType::Object(&OUTPUT_LOG_EVENT)),
        "The events.",
    ),
    optional(
        "nextForwardToken",
        FieldType::String,
        "The token for the next set of items in the forward direction.",
    ),
    optional(
        "nextBackwardToken",
        FieldType::String,
        "The token for the next set of items in the backward direction.",
    ),
]);

// =============================================================================
// filter_log_events
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterLogEventsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmask: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredLogEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<FilteredLogEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

pub const FILTER_LOG_EVENTS_REQUEST: ObjectShape = ObjectShape::request(&[
    optional("logGroupName", FieldType::String, "The name of the log group to search."),
    optional(
        "logGroupIdentifier",
        FieldType::String,
        "Specify either the name or ARN of the log group to view log events from.",
    ),
    optional(
        "logStreamNames",
        FieldType::Array(&FieldType::String),
        "Filters the results to only logs from the log streams in this list.",
    ),
    optional(
        "logStreamNamePrefix",
        FieldType::String,
        "Filters the results to include only events from log streams that have names starting with this prefix.",
    ),
    optional("startTime", FieldType::Integer, EPOCH_MILLIS),
    optional("endTime", FieldType::Integer, EPOCH_MILLIS),
    optional("filterPattern", FieldType::String, "The filter pattern to use."),
    optional(
        "nextToken",
        FieldType::String,
        "The token for the next set of events to return.",
    ),
    optional("limit", FieldType::Integer, "The maximum number of events to return."),
    optional("unmask", FieldType::Boolean, UNMASK),
]);

const FILTERED_LOG_EVENT: ObjectShape = ObjectShape::response(&[
    optional(
        "logStreamName",
        FieldType::String,
        "The name of the log stream to which this event belongs.",
    ),
    optional("timestamp", FieldType::Integer, EPOCH_MILLIS),
    optional("message", FieldType::String, "The data contained in the log event."),
    optional("ingestionTime", FieldType::Integer, EPOCH_MILLIS),
    optional("eventId", FieldType::String, "The ID of the event."),
]);

pub const FILTER_LOG_EVENTS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "events",
        FieldType::Array(&FieldType::Object(&FILTERED_LOG_EVENT)),
        "The matched events.",
    ),
    optional(
        "nextToken",
        FieldType::String,
        "The token to use when requesting the next set of items.",
    ),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, IssueCode};
    use serde_json::json;

    #[test]
    fn test_put_request_nested_event_issues() {
        let raw = json!({
            "logGroupName": "g",
            "logStreamName": "s",
            "logEvents": [{"timestamp": 1, "message": "m", "level": "INFO"}],
            "entity": {"attributes": {"k": "v"}}
        });
        let issues = validate(&PUT_LOG_EVENTS_REQUEST, &raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::UnrecognizedKeys);
        assert_eq!(issues[0].dotted_path(), "logEvents.0");
    }

    #[test]
    fn test_put_request_typed_roundtrip() {
        let request = PutLogEventsRequest {
            log_group_name: "g".into(),
            log_stream_name: "s".into(),
            log_events: vec![InputLogEvent {
                timestamp: 1_700_000_000_000,
                message: "hello".into(),
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(validate(&PUT_LOG_EVENTS_REQUEST, &value).unwrap(), value);
    }

    #[test]
    fn test_put_response_rejected_entity_enum() {
        let raw = json!({
            "$metadata": {"httpStatusCode": 200},
            "rejectedEntityInfo": {"errorType": "EntitySizeTooLarge"}
        });
        let normalized = validate(&PUT_LOG_EVENTS_RESPONSE, &raw).unwrap();
        let response: PutLogEventsResponse = serde_json::from_value(normalized).unwrap();
        assert_eq!(
            response.rejected_entity_info.unwrap().error_type,
            EntityRejectionErrorType::EntitySizeTooLarge
        );
    }

    #[test]
    fn test_get_request_requires_stream_name() {
        let issues = validate(&GET_LOG_EVENTS_REQUEST, &json!({"logGroupName": "g"})).unwrap_err();
        assert_eq!(issues[0].to_string(), "[invalid_type] logStreamName: Required");
    }

    #[test]
    fn test_filter_request_stream_names_must_be_strings() {
        let raw = json!({"logGroupName": "g", "logStreamNames": ["a", 2]});
        let issues = validate(&FILTER_LOG_EVENTS_REQUEST, &raw).unwrap_err();
        assert_eq!(
            issues[0].to_string(),
            "[invalid_type] logStreamNames.1: Expected string, received number"
        );
    }
}
