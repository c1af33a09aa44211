//! Argument validation and line codec throughput benchmark.
//!
//! Measures request-schema validation for small and large `put_log_events`
//! batches, and read_message/write_message latency, using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cloudwatch_logs_mcp::mcp::codec::{read_message, write_message};
use cloudwatch_logs_mcp::operations::{DescribeLogGroups, Operation, PutLogEvents};
use cloudwatch_logs_mcp::validation::validate;
use serde_json::{json, Value};
use tokio::io::BufReader;

const MAX_MESSAGE: usize = 5 * 1024 * 1024;

fn put_log_events_args(events: usize) -> Value {
    let log_events: Vec<Value> = (0..events)
        .map(|i| json!({"timestamp": 1_700_000_000_000_i64 + i as i64, "message": format!("event {i}")}))
        .collect();
    json!({"logGroupName": "app", "logStreamName": "main", "logEvents": log_events})
}

fn bench_validate_request(c: &mut Criterion) {
    let batch_sizes: &[usize] = &[1, 100, 1000, 10000];

    let mut group = c.benchmark_group("validate_put_log_events");
    for &size in batch_sizes {
        let args = put_log_events_args(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &args, |b, a| {
            b.iter(|| validate(PutLogEvents::REQUEST, black_box(a)).unwrap());
        });
    }
    group.finish();
}

fn bench_validate_response(c: &mut Criterion) {
    let groups: Vec<Value> = (0..50)
        .map(|i| {
            json!({
                "logGroupName": format!("/aws/lambda/fn-{i}"),
                "creationTime": 1_700_000_000_000_i64,
                "storedBytes": 4096,
                "logGroupClass": "STANDARD",
                "unmodeled": {"nested": true}
            })
        })
        .collect();
    let body = json!({"$metadata": {"httpStatusCode": 200}, "logGroups": groups, "nextToken": "t"});

    c.bench_function("validate_describe_log_groups_50", |b| {
        b.iter(|| validate(DescribeLogGroups::RESPONSE, black_box(&body)).unwrap());
    });
}

fn bench_codec(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let message = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "put_log_events", "arguments": put_log_events_args(100)}
    });

    c.bench_function("write_message_100_events", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut buf = Vec::with_capacity(8 * 1024);
                write_message(&mut buf, black_box(&message)).await.unwrap();
                buf
            })
        });
    });

    let wire = rt.block_on(async {
        let mut buf = Vec::new();
        write_message(&mut buf, &message).await.unwrap();
        buf
    });
    c.bench_function("read_message_100_events", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut reader = BufReader::new(black_box(wire.as_slice()));
                read_message(&mut reader, MAX_MESSAGE).await.unwrap()
            })
        });
    });
}

criterion_group!(benches, bench_validate_request, bench_validate_response, bench_codec);
criterion_main!(benches);
