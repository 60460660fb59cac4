//! Conversion from coordinate lists into compressed row/column layouts
//!
//! Both layouts are produced by the same counting sort: count entries per
//! bucket, prefix-sum the counts into pointers, then scatter every entry
//! to its bucket's cursor in input order. The scatter is stable, so entries
//! sharing a bucket keep their relative input order.

use log::{debug, error};

use crate::error::{MatrixError, Result};
use crate::matrix::compressed::CompressedMatrix;
use crate::matrix::config::{Layout, MatrixConfig};
use crate::matrix::coordinate::CoordinateMatrix;
use crate::matrix::MatrixValue;
use crate::utils::exclusive_scan;

/// Converts a coordinate list into a compressed matrix
///
/// # Arguments
///
/// * `coo` - Coordinate list; it is read twice and never modified
/// * `layout` - Row-major (CSR) or column-major (CSC) target
/// * `config` - Only `sort_indices` is consulted here
///
/// # Errors
///
/// Returns [`MatrixError::InternalConsistency`] if the bucket counts do not
/// add up to the number of entries. That indicates a defect in the converter,
/// never bad input.
pub fn convert<T: MatrixValue>(
    coo: &CoordinateMatrix<T>,
    layout: Layout,
    config: &MatrixConfig,
) -> Result<CompressedMatrix<T>> {
    debug!(
        "converting {} × {} matrix with {} entries to {}",
        coo.n_rows(),
        coo.n_cols(),
        coo.len(),
        layout
    );

    bucket_scatter(
        coo.n_rows(),
        coo.n_cols(),
        layout,
        coo.len(),
        || coo.entries().iter().map(|e| (e.row, e.col, e.value)),
        config,
    )
}

/// Converts a coordinate list into CSR
pub fn convert_to_csr<T: MatrixValue>(
    coo: &CoordinateMatrix<T>,
    config: &MatrixConfig,
) -> Result<CompressedMatrix<T>> {
    convert(coo, Layout::RowMajor, config)
}

/// Converts a coordinate list into CSC
pub fn convert_to_csc<T: MatrixValue>(
    coo: &CoordinateMatrix<T>,
    config: &MatrixConfig,
) -> Result<CompressedMatrix<T>> {
    convert(coo, Layout::ColumnMajor, config)
}

/// Counting-sort core shared by [`convert`] and [`CompressedMatrix::to_layout`]
///
/// `entries` must yield the same `len` triplets, in the same order, each
/// time it is called.
pub(crate) fn bucket_scatter<T, I, F>(
    n_rows: usize,
    n_cols: usize,
    layout: Layout,
    len: usize,
    entries: F,
    config: &MatrixConfig,
) -> Result<CompressedMatrix<T>>
where
    T: MatrixValue,
    I: Iterator<Item = (usize, usize, T)>,
    F: Fn() -> I,
{
    let dim = layout.bucket_dim(n_rows, n_cols);
    let secondary_dim = layout.bucket_dim(n_cols, n_rows);

    // Count entries per bucket
    let mut counts = vec![0usize; dim];
    for (row, col, _) in entries() {
        let (bucket, secondary) = layout.split(row, col);
        if bucket >= dim || secondary >= secondary_dim {
            return Err(inconsistency(format!(
                "entry ({}, {}) outside {} × {} matrix",
                row, col, n_rows, n_cols
            )));
        }
        counts[bucket] += 1;
    }

    // Compute pointers via prefix sum
    let pointers = exclusive_scan(&counts);
    if pointers[dim] != len {
        return Err(inconsistency(format!(
            "pointers[{}] = {} but the coordinate list holds {} entries",
            dim, pointers[dim], len
        )));
    }

    let mut indices = vec![0usize; len];
    let mut values = vec![T::zero(); len];

    // Scatter in input order; cursor[b] is the next free slot of bucket b
    let mut cursor = pointers[..dim].to_vec();
    for (row, col, value) in entries() {
        let (bucket, secondary) = layout.split(row, col);
        let pos = cursor[bucket];
        if pos >= pointers[bucket + 1] {
            return Err(inconsistency(format!(
                "bucket {} overflowed during scatter",
                bucket
            )));
        }

        indices[pos] = secondary;
        values[pos] = value;
        cursor[bucket] += 1;
    }

    if cursor.iter().zip(&pointers[1..]).any(|(c, end)| c != end) {
        return Err(inconsistency("scatter left buckets partially filled".to_string()));
    }

    if config.sort_indices {
        sort_within_buckets(&pointers, &mut indices, &mut values);
    }

    Ok(CompressedMatrix::from_raw_parts(
        n_rows, n_cols, layout, pointers, indices, values,
    ))
}

/// Stable ascending sort of the secondary indices inside every bucket
///
/// Values travel with their indices; duplicates stay as separate slots in
/// their original relative order.
pub(crate) fn sort_within_buckets<T: Copy>(pointers: &[usize], indices: &mut [usize], values: &mut [T]) {
    let mut scratch: Vec<(usize, T)> = Vec::new();

    for w in pointers.windows(2) {
        let (start, end) = (w[0], w[1]);
        let bucket = &indices[start..end];
        if bucket.windows(2).all(|p| p[0] <= p[1]) {
            continue;
        }

        scratch.clear();
        scratch.extend(bucket.iter().copied().zip(values[start..end].iter().copied()));
        scratch.sort_by_key(|&(idx, _)| idx);

        for (offset, &(idx, val)) in scratch.iter().enumerate() {
            indices[start + offset] = idx;
            values[start + offset] = val;
        }
    }
}

fn inconsistency(reason: String) -> MatrixError {
    error!("layout converter invariant violated: {}", reason);
    MatrixError::InternalConsistency { reason }
}

impl<T: MatrixValue> CompressedMatrix<T> {
    /// Sorts secondary indices within each bucket in place
    pub fn sort_indices(&mut self) {
        let (pointers, indices, values) = self.storage_mut();
        sort_within_buckets(pointers, indices, values);
    }
}
