//! Logs Insights queries are asynchronous: `start_query` returns an id that
//! `get_query_results` polls until the status is terminal.

use crate::schema::insights::*;

operation! {
    StartQuery => start_query(StartQueryRequest) -> StartQueryResponse,
    request: START_QUERY_REQUEST,
    response: START_QUERY_RESPONSE,
}

operation! {
    StopQuery => stop_query(StopQueryRequest) -> StopQueryResponse,
    request: STOP_QUERY_REQUEST,
    response: STOP_QUERY_RESPONSE,
}

operation! {
    GetQueryResults => get_query_results(GetQueryResultsRequest) -> GetQueryResultsResponse,
    request: GET_QUERY_RESULTS_REQUEST,
    response: GET_QUERY_RESULTS_RESPONSE,
}

operation! {
    DescribeQueries => describe_queries(DescribeQueriesRequest) -> DescribeQueriesResponse,
    request: DESCRIBE_QUERIES_REQUEST,
    response: DESCRIBE_QUERIES_RESPONSE,
}
