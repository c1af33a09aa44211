use crate::schema::events::*;

operation! {
    /// Write a batch of events to one stream.
    PutLogEvents => put_log_events(PutLogEventsRequest) -> PutLogEventsResponse,
    request: PUT_LOG_EVENTS_REQUEST,
    response: PUT_LOG_EVENTS_RESPONSE,
}

operation! {
    /// Read events from one stream.
    GetLogEvents => get_log_events(GetLogEventsRequest) -> GetLogEventsResponse,
    request: GET_LOG_EVENTS_REQUEST,
    response: GET_LOG_EVENTS_RESPONSE,
}

operation! {
    /// Search events across the streams of a group.
    FilterLogEvents => filter_log_events(FilterLogEventsRequest) -> FilterLogEventsResponse,
    request: FILTER_LOG_EVENTS_REQUEST,
    response: FILTER_LOG_EVENTS_RESPONSE,
}
