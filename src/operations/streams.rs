use crate::schema::streams::*;

operation! {
    /// Create a log stream in an existing group.
    CreateLogStream => create_log_stream(CreateLogStreamRequest) -> CreateLogStreamResponse,
    request: CREATE_LOG_STREAM_REQUEST,
    response: CREATE_LOG_STREAM_RESPONSE,
}

operation! {
    DescribeLogStreams => describe_log_streams(DescribeLogStreamsRequest) -> DescribeLogStreamsResponse,
    request: DESCRIBE_LOG_STREAMS_REQUEST,
    response: DESCRIBE_LOG_STREAMS_RESPONSE,
}

operation! {
    DeleteLogStream => delete_log_stream(DeleteLogStreamRequest) -> DeleteLogStreamResponse,
    request: DELETE_LOG_STREAM_REQUEST,
    response: DELETE_LOG_STREAM_RESPONSE,
}
