//! End-to-end tests: MatrixMarket text to compressed layouts

use std::io::Cursor;
use std::path::PathBuf;

use matrix_factory::{
    convert, convert_to_csc, convert_to_csr, load_compressed, read_matrix_market,
    read_matrix_market_file, write_matrix_market_file, CoordinateMatrix, Entry, Layout,
    MatrixConfig, MatrixError,
};

fn read(text: &str, config: &MatrixConfig) -> Result<CoordinateMatrix<f64>, MatrixError> {
    read_matrix_market(Cursor::new(text), config)
}

/// Unique path under the system temp directory
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matrix-factory-{}-{}.mtx", std::process::id(), name))
}

const GENERAL_5X5: &str = "%%MatrixMarket matrix coordinate real general\n\
% 5x5 test matrix\n\
%   [ 1.0  0.0  2.0  0.0  0.0 ]\n\
%   [ 0.0  3.0  0.0  0.0  4.0 ]\n\
%   [ 0.0  0.0  5.0  0.0  0.0 ]\n\
%   [ 6.0  0.0  0.0  7.0  0.0 ]\n\
%   [ 0.0  0.0  8.0  0.0  9.0 ]\n\
5 5 9\n\
4 1 6.0\n\
1 3 2.0\n\
2 5 4.0\n\
5 5 9.0\n\
1 1 1.0\n\
3 3 5.0\n\
2 2 3.0\n\
4 4 7.0\n\
5 3 8.0\n";

#[test]
fn test_diagonal_row_major() {
    let text = "%%MatrixMarket matrix coordinate real general\n\
                3 3 3\n\
                1 1 1.0\n\
                2 2 2.0\n\
                3 3 3.0\n";
    let config = MatrixConfig::default();
    let coo = read(text, &config).unwrap();
    let csr = convert_to_csr(&coo, &config).unwrap();

    assert_eq!(csr.pointers(), &[0, 1, 2, 3]);
    assert_eq!(csr.indices(), &[0, 1, 2]);
    assert_eq!(csr.values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_symmetric_lower_entry_only() {
    let text = "%%MatrixMarket matrix coordinate real symmetric\n\
                3 3 1\n\
                3 2 5.0\n";
    let config = MatrixConfig::default();
    let coo = read(text, &config).unwrap();

    // The mirrored (1, 2) entry is not synthesized
    assert_eq!(coo.entries(), &[Entry::new(2, 1, 5.0)]);

    // Row 2 is the only non-empty bucket
    let csr = coo.into_compressed(Layout::RowMajor, &config).unwrap();
    assert_eq!(csr.pointers(), &[0, 0, 0, 1]);
    assert_eq!(csr.indices(), &[1]);
    assert_eq!(csr.values(), &[5.0]);
}

#[test]
fn test_dropped_value_tokens_keep_stream_in_sync() {
    // Upper entries carry values that would be misread as indices if skipped
    let text = "%%MatrixMarket matrix coordinate real symmetric\n\
                3 3 5\n\
                1 1 1.0\n\
                1 3 3\n\
                2 1 2.0\n\
                2 3 2\n\
                3 3 3.0\n";
    let coo = read(text, &MatrixConfig::default()).unwrap();

    assert_eq!(
        coo.entries(),
        &[
            Entry::new(0, 0, 1.0),
            Entry::new(1, 0, 2.0),
            Entry::new(2, 2, 3.0),
        ]
    );
    assert_eq!(coo.declared_nnz(), 5);
}

#[test]
fn test_pattern_padding() {
    let text = "%%MatrixMarket matrix coordinate pattern general\n\
                2 2 2\n\
                1 2\n\
                2 1\n";
    let config = MatrixConfig::default().with_padding_value(1.0);
    let coo = read(text, &config).unwrap();

    assert_eq!(coo.entries(), &[Entry::new(0, 1, 1.0), Entry::new(1, 0, 1.0)]);

    let csc = convert_to_csc(&coo, &config).unwrap();
    assert_eq!(csc.values(), &[1.0, 1.0]);
    assert_eq!(csc.as_csc().unwrap().row_indices(), &[1, 0]);
}

#[test]
fn test_pattern_symmetric_keeps_lower_triangle() {
    // No value tokens: each dropped entry consumes exactly its two indices
    let text = "%%MatrixMarket matrix coordinate pattern symmetric\n\
                3 3 4\n\
                1 2\n\
                2 1\n\
                1 3\n\
                3 3\n";
    let config = MatrixConfig::default().with_padding_value(1.0);
    let coo = read(text, &config).unwrap();

    assert_eq!(coo.entries(), &[Entry::new(1, 0, 1.0), Entry::new(2, 2, 1.0)]);
    assert_eq!(coo.declared_nnz(), 4);

    let csr = convert_to_csr(&coo, &config).unwrap();
    assert_eq!(csr.pointers(), &[0, 0, 1, 2]);
    assert_eq!(csr.indices(), &[0, 2]);
}

#[test]
fn test_pattern_general_with_triangular_flag() {
    let text = "%%MatrixMarket matrix coordinate pattern general\n\
                3 3 4\n\
                1 2\n\
                2 1\n\
                2 3\n\
                3 3\n";
    let config = MatrixConfig::default()
        .with_padding_value(1.0)
        .with_triangular(true);
    let coo = read(text, &config).unwrap();

    assert_eq!(coo.entries(), &[Entry::new(1, 0, 1.0), Entry::new(2, 2, 1.0)]);

    // Without the flag every entry is kept
    let all = read(text, &MatrixConfig::default().with_padding_value(1.0)).unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn test_unknown_symmetry_keeps_lower_triangle() {
    let text = "%%MatrixMarket matrix coordinate real skew\n\
                2 2 2\n\
                1 2 4.0\n\
                2 1 -4.0\n";
    let coo = read(text, &MatrixConfig::default()).unwrap();

    assert_eq!(coo.entries(), &[Entry::new(1, 0, -4.0)]);
}

#[test]
fn test_missing_banner_is_invalid_header() {
    let text = "5 5 1\n1 1 1.0\n";
    let err = read(text, &MatrixConfig::default()).unwrap_err();

    assert!(matches!(err, MatrixError::InvalidHeader { .. }));
    assert!(!err.is_internal());
}

#[test]
fn test_file_order_within_buckets() {
    let config = MatrixConfig::default();
    let coo = read(GENERAL_5X5, &config).unwrap();
    let csc = convert(&coo, Layout::ColumnMajor, &config).unwrap();
    let view = csc.as_csc().unwrap();

    assert_eq!(view.col_pointers(), &[0, 2, 3, 6, 7, 9]);
    // Column 0 holds rows 3 then 0, as they appear in the file
    let col0: Vec<_> = view.col_iter(0).collect();
    assert_eq!(col0, vec![(3, &6.0), (0, &1.0)]);
    // Column 2 holds rows 0, 2, 4
    let col2: Vec<_> = view.col_iter(2).map(|(r, _)| r).collect();
    assert_eq!(col2, vec![0, 2, 4]);

    let sorted = convert(&coo, Layout::ColumnMajor, &config.with_sorted_indices(true)).unwrap();
    let col0: Vec<_> = sorted.as_csc().unwrap().col_iter(0).collect();
    assert_eq!(col0, vec![(0, &1.0), (3, &6.0)]);
}

#[test]
fn test_row_and_column_layouts_agree() {
    let config = MatrixConfig::default();
    let coo = read(GENERAL_5X5, &config).unwrap();

    let csr = convert_to_csr(&coo, &config).unwrap();
    let csc = convert_to_csc(&coo, &config).unwrap();

    assert_eq!(csr.to_dense(), csc.to_dense());
    assert_eq!(csr.to_dense()[[3, 0]], 6.0);
    assert_eq!(csr.to_dense()[[4, 2]], 8.0);
}

#[test]
fn test_duplicates_are_not_merged() {
    let text = "%%MatrixMarket matrix coordinate real general\n\
                2 2 3\n\
                1 1 1.0\n\
                1 1 2.0\n\
                2 2 3.0\n";
    let config = MatrixConfig::default().with_sorted_indices(true);
    let coo = read(text, &config).unwrap();
    let csr = convert_to_csr(&coo, &config).unwrap();

    assert_eq!(csr.nnz(), 3);
    assert_eq!(csr.pointers(), &[0, 2, 3]);
    assert_eq!(csr.indices(), &[0, 0, 1]);
    assert_eq!(csr.values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_integer_values_into_i64() {
    let text = "%%MatrixMarket matrix coordinate integer general\n\
                2 3 2\n\
                1 3 -4\n\
                2 1 7\n";
    let coo = read_matrix_market::<i64, _>(Cursor::new(text), &MatrixConfig::default()).unwrap();
    let csr = convert_to_csr(&coo, &MatrixConfig::default()).unwrap();

    assert_eq!(csr.values(), &[-4, 7]);
    assert_eq!(csr.indices(), &[2, 0]);
}

#[test]
fn test_file_roundtrip() {
    let config = MatrixConfig::default();
    let coo = read(GENERAL_5X5, &config).unwrap();
    let csr = convert_to_csr(&coo, &config).unwrap();

    let path = temp_path("roundtrip");
    write_matrix_market_file(&path, &csr).unwrap();

    let reread = read_matrix_market_file::<f64, _>(&path, &config).unwrap();
    assert_eq!(reread.len(), 9);

    let loaded = load_compressed::<f64, _>(&path, Layout::RowMajor, &config).unwrap();
    assert_eq!(loaded, csr);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file() {
    let path = temp_path("does-not-exist");
    let err = read_matrix_market_file::<f64, _>(&path, &MatrixConfig::default()).unwrap_err();

    match err {
        MatrixError::FileOpen { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unsupported_inputs() {
    let config = MatrixConfig::default();

    let array = "%%MatrixMarket matrix array real general\n2 2\n1\n2\n3\n4\n";
    assert!(matches!(
        read(array, &config),
        Err(MatrixError::UnsupportedFormat { .. })
    ));

    let complex = "%%MatrixMarket matrix coordinate complex hermitian\n2 2 1\n2 1 1.0 -1.0\n";
    assert!(matches!(
        read(complex, &config),
        Err(MatrixError::UnsupportedField { .. })
    ));

    let garbage = "%%MatrixMarket matrix coordinate real general\n2 2 1\n1 one 1.0\n";
    assert!(matches!(
        read(garbage, &config),
        Err(MatrixError::MalformedEntry { line: 3, .. })
    ));

    assert!(matches!(
        "dense".parse::<Layout>(),
        Err(MatrixError::UnsupportedLayout { .. })
    ));
}
