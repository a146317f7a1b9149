//! Performance benchmarks for tool-call decoding.
//!
//! These benchmarks measure the work done before any HTTP request leaves:
//! - Argument decoding and validation per tool
//! - Shaping a decoded call into a client request
//! - Catalog access

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};
use std::time::Duration;
use zoho_crm_mcp_server::tools::{list_tools, ToolCall};

fn sample_calls() -> Vec<(&'static str, Map<String, Value>)> {
    let calls = vec![
        ("get_crm_records", json!({"module": "Leads", "page": 2, "per_page": 200, "sort_order": "desc"})),
        ("search_crm_by_email", json!({"module": "Contacts", "email": "jane@example.com"})),
        (
            "create_crm_lead",
            json!({
                "first_name": "Jane",
                "last_name": "Roe",
                "company": "Zylker",
                "additional_fields": {"Lead_Status": "New", "Annual_Revenue": 100000}
            }),
        ),
        (
            "update_crm_record",
            json!({"module": "Deals", "record_id": "4150868000000224005", "data": {"Stage": "Closed Won"}}),
        ),
    ];

    calls
        .into_iter()
        .map(|(name, value)| match value {
            Value::Object(map) => (name, map),
            _ => unreachable!("sample arguments are objects"),
        })
        .collect()
}

/// Benchmark decoding arguments into a typed call.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tool_call_parse");
    for (name, arguments) in sample_calls() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &arguments, |b, args| {
            b.iter(|| ToolCall::parse(black_box(name), Some(black_box(args))))
        });
    }
    group.finish();
}

/// Benchmark decoding plus request shaping.
fn bench_into_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("tool_call_into_request");
    for (name, arguments) in sample_calls() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &arguments, |b, args| {
            b.iter(|| {
                ToolCall::parse(black_box(name), Some(black_box(args)))
                    .and_then(ToolCall::into_request)
            })
        });
    }
    group.finish();
}

/// Benchmark catalog access once the catalog is built.
fn bench_catalog(c: &mut Criterion) {
    let _ = list_tools();
    c.bench_function("catalog_list_tools", |b| {
        b.iter(|| black_box(list_tools()).len())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_parse, bench_into_request, bench_catalog
}

criterion_main!(benches);
