use crate::schema::groups::*;

operation! {
    /// Create a log group.
    CreateLogGroup => create_log_group(CreateLogGroupRequest) -> CreateLogGroupResponse,
    request: CREATE_LOG_GROUP_REQUEST,
    response: CREATE_LOG_GROUP_RESPONSE,
}

operation! {
    /// List log groups, optionally filtered by prefix, pattern or class.
    DescribeLogGroups => describe_log_groups(DescribeLogGroupsRequest) -> DescribeLogGroupsResponse,
    request: DESCRIBE_LOG_GROUPS_REQUEST,
    response: DESCRIBE_LOG_GROUPS_RESPONSE,
}

operation! {
    /// Delete a log group and every stream in it.
    DeleteLogGroup => delete_log_group(DeleteLogGroupRequest) -> DeleteLogGroupResponse,
    request: DELETE_LOG_GROUP_REQUEST,
    response: DELETE_LOG_GROUP_RESPONSE,
}
