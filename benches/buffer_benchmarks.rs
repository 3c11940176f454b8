//! Benchmarks for text buffer operations.
//!
//! Run with: cargo bench

use blackhole_buffer::TextBuffer;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generates a large text string for benchmarking.
fn generate_large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {}: This is a sample line of text for benchmarking purposes.\n", i))
        .collect()
}

/// Benchmarks buffer creation.
fn bench_buffer_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_creation");

    for size in [100, 1000, 10000, 100000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("from_string", size), &text, |b, text| {
            b.iter(|| {
                let buffer = TextBuffer::from(black_box(text.as_str()));
                black_box(buffer)
            })
        });
    }

    group.finish();
}

/// Benchmarks replacing the whole text, which happens on every keystroke.
fn bench_set_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_text");

    for size in [1000, 10000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("replace_all", size), &text, |b, text| {
            b.iter_with_setup(TextBuffer::new, |mut buffer| {
                buffer.set_text(black_box(text));
                black_box(buffer)
            })
        });
    }

    group.finish();
}

/// Benchmarks the save and load round trip through the filesystem.
fn bench_file_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_io");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bench.txt");
    let buffer = TextBuffer::from(generate_large_text(10000));

    group.bench_function("write_to", |b| {
        b.iter(|| buffer.write_to(black_box(&path)).expect("write"))
    });

    buffer.write_to(&path).expect("write");
    group.bench_function("from_file", |b| {
        b.iter(|| black_box(TextBuffer::from_file(black_box(&path)).expect("read")))
    });

    group.finish();
}

/// Benchmarks text extraction.
fn bench_text(c: &mut Criterion) {
    let buffer = TextBuffer::from(generate_large_text(10000));

    c.bench_function("text_10k_lines", |b| {
        b.iter(|| black_box(buffer.text().len()))
    });
}

criterion_group!(
    benches,
    bench_buffer_creation,
    bench_set_text,
    bench_file_io,
    bench_text,
);
criterion_main!(benches);
