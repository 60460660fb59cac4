//! Benchmarks for reading MatrixMarket text and converting to CSR/CSC

use std::fmt::Write;
use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_factory::{convert, read_matrix_market, CoordinateMatrix, Layout, MatrixConfig};

/// Generates a banded n × n matrix in MatrixMarket text, columns in reverse order
fn banded_matrix_text(n: usize, bandwidth: usize) -> String {
    let mut entries = Vec::new();
    for i in 0..n {
        let lo = i.saturating_sub(bandwidth);
        let hi = (i + bandwidth).min(n - 1);
        for j in (lo..=hi).rev() {
            entries.push((i + 1, j + 1, (i * n + j) as f64 * 0.5));
        }
    }

    let mut text = String::from("%%MatrixMarket matrix coordinate real general\n");
    writeln!(text, "{} {} {}", n, n, entries.len()).unwrap();
    for (i, j, v) in entries {
        writeln!(text, "{} {} {}", i, j, v).unwrap();
    }
    text
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_matrix_market");
    let config = MatrixConfig::default();

    for n in [1_000, 10_000] {
        let text = banded_matrix_text(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |bench, text| {
            bench.iter(|| {
                let coo: CoordinateMatrix<f64> =
                    read_matrix_market(Cursor::new(text.as_bytes()), &config).unwrap();
                black_box(coo)
            })
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for n in [1_000, 10_000] {
        let text = banded_matrix_text(n, 4);
        let coo: CoordinateMatrix<f64> =
            read_matrix_market(Cursor::new(text.as_bytes()), &MatrixConfig::default()).unwrap();

        for (name, layout) in [("csr", Layout::RowMajor), ("csc", Layout::ColumnMajor)] {
            for sort in [false, true] {
                let config = MatrixConfig::default().with_sorted_indices(sort);
                let id = format!("{}{}_{}", name, if sort { "_sorted" } else { "" }, n);
                group.bench_function(id, |bench| {
                    bench.iter(|| black_box(convert(&coo, layout, &config).unwrap()))
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_read, bench_convert);
criterion_main!(benches);
