//! Criterion benchmarks for log_recorder

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use log_recorder::prelude::*;
use std::io::{self, Sink};

type SinkRecorder = LogRecorder<ConsoleAppender<Sink, Sink>>;

fn sink_recorder() -> SinkRecorder {
    LogRecorder::builder().writers(io::sink(), io::sink()).build()
}

// ============================================================================
// Logging Benchmarks
// ============================================================================

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");
    group.throughput(Throughput::Elements(1));

    for severity in Severity::ALL {
        group.bench_function(severity.to_str(), |b| {
            let mut recorder = sink_recorder();
            b.iter(|| recorder.log(black_box(severity), black_box("Benchmark message")));
        });
    }

    group.bench_function("json_output", |b| {
        let mut recorder = LogRecorder::builder()
            .writers(io::sink(), io::sink())
            .output_format(OutputFormat::Json)
            .build();
        b.iter(|| recorder.info(black_box("Benchmark message")));
    });

    group.bench_function("rejected_empty", |b| {
        let mut recorder = sink_recorder();
        b.iter(|| recorder.info(black_box("")));
    });

    group.finish();
}

// ============================================================================
// Replay Benchmarks
// ============================================================================

fn bench_print_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_all");

    for size in [10usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("{}_entries", size), |b| {
            b.iter_batched(
                || {
                    let mut recorder = sink_recorder();
                    for i in 0..size {
                        let _ = recorder.debug(format!("Message {}", i));
                    }
                    recorder
                },
                |mut recorder| recorder.print_all(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Timestamp Benchmarks
// ============================================================================

fn bench_timestamp_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_format");
    let now = chrono::Local::now();

    for format in [
        TimestampFormat::Console,
        TimestampFormat::Iso8601,
        TimestampFormat::UnixMillis,
    ] {
        group.bench_function(format!("{:?}", format), |b| {
            b.iter(|| black_box(&format).format(black_box(&now)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_log, bench_print_all, bench_timestamp_format);
criterion_main!(benches);
