use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use csvscan::Parser;

fn unquoted_document(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("{},name{},{}.5,active\n", i, i, i * 3))
        .collect()
}

fn quoted_document(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("\"{}\",\"Doe, J{}\",\"said \"\"hi\"\"\nagain\"\r\n", i, i))
        .collect()
}

fn mixed_document(rows: usize) -> String {
    (0..rows)
        .map(|i| match i % 3 {
            0 => format!("{},plain,\"quoted, field\"\n", i),
            1 => format!("\"{}\",,trailing,\r\n", i),
            _ => format!("{},\"multi\rline\",x\r", i),
        })
        .collect()
}

// ============ Scanner Benchmarks ============

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = Parser::default();

    for rows in [100, 10_000] {
        for (name, text) in [
            ("unquoted", unquoted_document(rows)),
            ("quoted", quoted_document(rows)),
            ("mixed", mixed_document(rows)),
        ] {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, rows), &text, |b, text| {
                b.iter(|| parser.parse(black_box(text)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_long_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_field");
    let parser = Parser::default();

    let plain = "x".repeat(1 << 20);
    let quoted = format!("\"{}\"", "ab\"\"".repeat(1 << 18));

    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("unquoted_1mb", |b| {
        b.iter(|| parser.parse(black_box(&plain)).unwrap())
    });

    group.throughput(Throughput::Bytes(quoted.len() as u64));
    group.bench_function("quoted_1mb", |b| {
        b.iter(|| parser.parse(black_box(&quoted)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_documents, bench_long_field);
criterion_main!(benches);
