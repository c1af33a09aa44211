//! Log group operations: create, describe, delete.

use super::common::{
    EmptyResponse, ResponseMetadata, EMPTY_RESPONSE, EPOCH_MILLIS, LOG_GROUP_NAME, METADATA_FIELD,
    NEXT_TOKEN,
};
use super::enums::{DataProtectionStatus, InheritedProperty, LogGroupClass};
use super::{optional, required, FieldType, ObjectShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// create_log_group
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLogGroupRequest {
    pub log_group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<LogGroupClass>,
}

pub type CreateLogGroupResponse = EmptyResponse;

pub const CREATE_LOG_GROUP_REQUEST: ObjectShape = ObjectShape::request(&[
    required("logGroupName", FieldType::String, "A name for the log group."),
    optional(
        "kmsKeyId",
        FieldType::String,
        "The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.",
    ),
    optional(
        "tags",
        FieldType::Map(&FieldType::String),
        "The key-value pairs to use for the tags.",
    ),
    optional(
        "logGroupClass",
        FieldType::Enum(LogGroupClass::VALUES),
        "Use this parameter to specify the log group class for this log group.",
    ),
]);

pub const CREATE_LOG_GROUP_RESPONSE: ObjectShape = EMPTY_RESPONSE;

// =============================================================================
// describe_log_groups
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescribeLogGroupsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_identifiers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_linked_accounts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<LogGroupClass>,
}

/// A log group as reported by `DescribeLogGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_filter_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_protection_status: Option<DataProtectionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_properties: Option<Vec<InheritedProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<LogGroupClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsResponse {
    #[serde(rename = "$metadata")]
    pub metadata: ResponseMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_groups: Option<Vec<LogGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

pub const DESCRIBE_LOG_GROUPS_REQUEST: ObjectShape = ObjectShape::request(&[
    optional(
        "accountIdentifiers",
        FieldType::Array(&FieldType::String),
        "When `includeLinkedAccounts` is set to `True`, use this parameter to specify the list of accounts to search.",
    ),
    optional("logGroupNamePrefix", FieldType::String, "The prefix to match."),
    optional(
        "logGroupNamePattern",
        FieldType::String,
        "Returns only log groups whose names match this case-sensitive substring.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
    optional("limit", FieldType::Integer, "The maximum number of items returned."),
    optional(
        "includeLinkedAccounts",
        FieldType::Boolean,
        "If you are using a monitoring account, set this to `True` to have the operation return log groups in the accounts listed in `accountIdentifiers`.",
    ),
    optional(
        "logGroupClass",
        FieldType::Enum(LogGroupClass::VALUES),
        "Specifies the log group class for this log group.",
    ),
]);

const LOG_GROUP: ObjectShape = ObjectShape::response(&[
    optional("logGroupName", FieldType::String, LOG_GROUP_NAME),
    optional("creationTime", FieldType::Integer, EPOCH_MILLIS),
    optional(
        "retentionInDays",
        FieldType::Integer,
        "The number of days to retain the log events in the specified log group.",
    ),
    optional("metricFilterCount", FieldType::Integer, "The number of metric filters."),
    optional("arn", FieldType::String, "The Amazon Resource Name (ARN) of the log group."),
    optional("storedBytes", FieldType::Integer, "The number of bytes stored."),
    optional(
        "kmsKeyId",
        FieldType::String,
        "The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.",
    ),
    optional(
        "dataProtectionStatus",
        FieldType::Enum(DataProtectionStatus::VALUES),
        "Whether this log group has a protection policy, or had one in the past.",
    ),
    optional(
        "inheritedProperties",
        FieldType::Array(&FieldType::Enum(InheritedProperty::VALUES)),
        "The properties this log group has inherited from account-level settings.",
    ),
    optional(
        "logGroupClass",
        FieldType::Enum(LogGroupClass::VALUES),
        "The log group class for this log group.",
    ),
    optional(
        "logGroupArn",
        FieldType::String,
        "The Amazon Resource Name (ARN) of the log group.",
    ),
]);

pub const DESCRIBE_LOG_GROUPS_RESPONSE: ObjectShape = ObjectShape::response(&[
    METADATA_FIELD,
    optional(
        "logGroups",
        FieldType::Array(&FieldType::Object(&LOG_GROUP)),
        "The log groups.",
    ),
    optional("nextToken", FieldType::String, NEXT_TOKEN),
]);

// =============================================================================
// delete_log_group
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteLogGroupRequest {
    pub log_group_name: String,
}

pub type DeleteLogGroupResponse = EmptyResponse;

pub const DELETE_LOG_GROUP_REQUEST: ObjectShape = ObjectShape::request(&[required(
    "logGroupName",
    FieldType::String,
    LOG_GROUP_NAME,
)]);

pub const DELETE_LOG_GROUP_RESPONSE: ObjectShape = EMPTY_RESPONSE;
