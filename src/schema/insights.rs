//! Logs Insights query operations: start, stop, fetch results, list.

use super::common::{ResponseMetadata, LOG_GROUP_NAME, METADATA_FIELD, NEXT_TOKEN};
use super::enums::{QueryLanguage, QueryStatus};
use super::{optional, required, FieldType, ObjectShape};
use serde::{Deserialize, Serialize};

const QUERY_ID: &str = "The ID number of the query.";
const QUERY_LANGUAGE: &str = "The query language of the query.";

// =============================================================================
// start_query
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<QueryLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_identifiers: Option<Vec<String>>,
    pub start_time: i64,
    pub end_time: i64,
    pub query_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQueryResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

pub const START_QUERY_REQUEST: ObjectShape = ObjectShape::request(&[
    optional(
        "queryLanguage",
        FieldType::Enum(QueryLanguage::VALUES),
        "Specify the query language to use for this query.",
    ),
    optional(
        "logGroupName",
        FieldType::String,
        "The log group on which to perform the query.",
    ),
    optional(
        "logGroupNames",
        FieldType::Array(&FieldType::String),
        "The list of log groups to be queried.",
    ),
    optional(
        "logGroupIdentifiers",
        FieldType::Array(&FieldType::String),
        "The list of log groups to query.",
    ),
    required(
        "startTime",
        FieldType::Integer,
        "The beginning of the time range to query, in seconds after Jan 1, 1970 00:00:00 UTC.",
    ),
    required(
        "endTime",
        FieldType::Integer,
        "The end of the time range to query, in seconds after Jan 1, 1970 00:00:00 UTC.",
    ),
    required("queryString", FieldType::String, "The query string to use."),
    optional(
        "limit",
        FieldType::Integer,
        "The maximum number of log events to return in the query.",
    ),
]);

pub const START_QUERY_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional("queryId", FieldType::String, "The unique ID of the query."),
]);

// =============================================================================
// stop_query
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StopQueryRequest {
    pub query_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopQueryResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

pub const STOP_QUERY_REQUEST: ObjectShape = ObjectShape::request(&[required(
    "queryId",
    FieldType::String,
    "The ID number of the query to stop.",
)]);

pub const STOP_QUERY_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "success",
        FieldType::Boolean,
        "This is true if the query was stopped by the `StopQuery` operation.",
    ),
]);

// =============================================================================
// get_query_results
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetQueryResultsRequest {
    pub query_id: String,
}

/// One field of one result row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_matched: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_scanned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_records_skipped: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_scanned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_bytes_skipped: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_groups_scanned: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQueryResultsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<QueryLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Vec<ResultField>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<QueryStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QueryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
}

pub const GET_QUERY_RESULTS_REQUEST: ObjectShape =
    ObjectShape::request(&[required("queryId", FieldType::String, QUERY_ID)]);

const RESULT_FIELD: ObjectShape = ObjectShape::response(&[
    optional("field", FieldType::String, "The log event field."),
    optional("value", FieldType::String, "The value of this field."),
]);

const QUERY_STATISTICS: ObjectShape = ObjectShape::response(&[
    optional(
        "recordsMatched",
        FieldType::Number,
        "The number of log events that matched the query string.",
    ),
    optional(
        "recordsScanned",
        FieldType::Number,
        "The total number of log events scanned during the query.",
    ),
    optional(
        "estimatedRecordsSkipped",
        FieldType::Number,
        "An estimate of the number of log events that were skipped.",
    ),
    optional(
        "bytesScanned",
        FieldType::Number,
        "The total number of bytes in the log events scanned during the query.",
    ),
    optional(
        "estimatedBytesSkipped",
        FieldType::Number,
        "An estimate of the number of bytes in the log events that were skipped.",
    ),
    optional(
        "logGroupsScanned",
        FieldType::Number,
        "The number of log groups that were scanned by this query.",
    ),
]);

pub const GET_QUERY_RESULTS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "queryLanguage",
        FieldType::Enum(QueryLanguage::VALUES),
        QUERY_LANGUAGE,
    ),
    optional(
        "results",
        FieldType::Array(&FieldType::Array(&FieldType::Object(&RESULT_FIELD))),
        "The log events that matched the query criteria.",
    ),
    optional(
        "statistics",
        FieldType::Object(&QUERY_STATISTICS),
        "Includes the number of log events scanned by the query.",
    ),
    optional(
        "status",
        FieldType::Enum(QueryStatus::VALUES),
        "The status of the most recent running of the query.",
    ),
    optional(
        "encryptionKey",
        FieldType::String,
        "If you associated an KMS key with the CloudWatch Logs Insights query results, this is its ARN.",
    ),
]);

// =============================================================================
// describe_queries
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescribeQueriesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QueryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<QueryLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<QueryLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QueryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeQueriesResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<QueryInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

pub const DESCRIBE_QUERIES_REQUEST: ObjectShape = ObjectShape::request(&[
    optional(
        "logGroupName",
        FieldType::String,
        "Limits the returned queries to only those for the specified log group.",
    ),
    optional(
        "status",
        FieldType::Enum(QueryStatus::VALUES),
        "Limits the returned queries to only those that have the specified status.",
    ),
    optional(
        "maxResults",
        FieldType::Integer,
        "Limits the number of returned queries to the specified number.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
    optional(
        "queryLanguage",
        FieldType::Enum(QueryLanguage::VALUES),
        "Limits the returned queries to only the queries that use the specified query language.",
    ),
]);

const QUERY_INFO: ObjectShape = ObjectShape::response(&[
    optional(
        "queryLanguage",
        FieldType::Enum(QueryLanguage::VALUES),
        QUERY_LANGUAGE,
    ),
    optional("queryId", FieldType::String, QUERY_ID),
    optional("queryString", FieldType::String, "The query string used in this query."),
    optional(
        "status",
        FieldType::Enum(QueryStatus::VALUES),
        "The status of this query.",
    ),
    optional(
        "createTime",
        FieldType::Integer,
        "The date and time that this query was created.",
    ),
    optional("logGroupName", FieldType::String, LOG_GROUP_NAME),
]);

pub const DESCRIBE_QUERIES_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "queries",
        FieldType::Array(&FieldType::Object(&QUERY_INFO)),
        "The list of queries that match the request.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
]);
