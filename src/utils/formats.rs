//! Utilities for converting between our compressed format and sprs

use sprs::{CsMat, TriMat};

use crate::matrix::{CompressedMatrix, Layout, MatrixValue};

/// Converts a compressed matrix to sprs `CsMat` in the same layout
///
/// sprs keeps indices sorted and unique, so duplicate entries are summed
/// on the way through.
pub fn to_sprs<T>(matrix: &CompressedMatrix<T>) -> CsMat<T>
where
    T: MatrixValue + Default,
{
    let mut row_inds = Vec::with_capacity(matrix.nnz());
    let mut col_inds = Vec::with_capacity(matrix.nnz());
    let mut vals = Vec::with_capacity(matrix.nnz());

    for (row, col, value) in matrix.triplets() {
        row_inds.push(row);
        col_inds.push(col);
        vals.push(value);
    }

    let tri = TriMat::from_triplets((matrix.n_rows(), matrix.n_cols()), row_inds, col_inds, vals);
    match matrix.layout() {
        Layout::RowMajor => tri.to_csr(),
        Layout::ColumnMajor => tri.to_csc(),
    }
}

/// Converts a sprs `CsMat` into a compressed matrix, keeping its storage order
pub fn from_sprs<T>(matrix: CsMat<T>) -> CompressedMatrix<T>
where
    T: MatrixValue + Default,
{
    let layout = if matrix.is_csr() {
        Layout::RowMajor
    } else {
        Layout::ColumnMajor
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    CompressedMatrix::new(n_rows, n_cols, layout, indptr, indices, data)
}
