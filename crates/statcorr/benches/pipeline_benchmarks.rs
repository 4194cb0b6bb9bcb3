//! Full pipeline performance benchmarks.
//!
//! Measures end-to-end analysis including decoding, classification, the
//! pairwise stage, and report emission, at several row/column scales.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use statcorr::{Analyzer, TableFormat};

/// Generate a deterministic delimited payload with `cols` numeric columns,
/// one text column, and some unparseable cells.
fn generate_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for c in 0..cols {
        data.push_str(&format!("metric_{c},"));
    }
    data.push_str("label\n");

    for row in 0..rows {
        for c in 0..cols {
            if row % 97 == 0 && c == 0 {
                data.push_str("n/a,");
            } else {
                // Mix of trends and noise, fully deterministic.
                let v = (row * (c + 1)) as f64 + ((row * 31 + c * 17) % 13) as f64 * 0.5;
                data.push_str(&format!("{v:.2},"));
            }
        }
        data.push_str(&format!("row_{row}\n"));
    }

    data
}

fn bench_pipeline_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_rows");

    for rows in [100, 500, 1000] {
        let data = generate_data(rows, 5);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            let analyzer = Analyzer::new();
            b.iter(|| {
                analyzer
                    .analyze_bytes(black_box(data.as_bytes()), TableFormat::Delimited, None)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_pipeline_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_columns");

    for cols in [5, 10, 20] {
        let data = generate_data(1000, cols);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cols), &data, |b, data| {
            let analyzer = Analyzer::new();
            b.iter(|| {
                analyzer
                    .analyze_bytes(black_box(data.as_bytes()), TableFormat::Delimited, None)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline_rows, bench_pipeline_columns);
criterion_main!(benches);
