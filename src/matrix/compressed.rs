//! Owned compressed storage shared by the CSR and CSC views

use std::fmt;

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::matrix::config::{Layout, MatrixConfig};
use crate::matrix::conversion::bucket_scatter;
use crate::matrix::csc::CscView;
use crate::matrix::csr::CsrView;
use crate::matrix::MatrixValue;

/// A sparse matrix stored as pointer, index and value arrays
///
/// The three arrays are laid out by `layout`:
/// - pointers: size dim + 1, where dim is n_rows (row-major) or n_cols (column-major)
/// - indices: size nnz, the secondary index (column for row-major, row for column-major)
/// - values: size nnz
///
/// `pointers[0] == 0`, `pointers` is non-decreasing and `pointers[dim] == nnz`.
/// Bucket `i` owns `indices[pointers[i]..pointers[i + 1]]` and the matching values.
#[derive(Clone, PartialEq)]
pub struct CompressedMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    layout: Layout,
    pointers: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixValue> CompressedMatrix<T> {
    /// Creates a compressed matrix from raw arrays
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - pointers.len() must be dim + 1
    /// - indices.len() must equal values.len()
    /// - pointers must start at 0, be non-decreasing and end at indices.len()
    /// - every secondary index must be in bounds
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        layout: Layout,
        pointers: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        let dim = layout.bucket_dim(n_rows, n_cols);
        let secondary_dim = layout.bucket_dim(n_cols, n_rows);

        assert_eq!(pointers.len(), dim + 1, "pointers.len() must be dim + 1");
        assert_eq!(indices.len(), values.len(), "indices.len() must equal values.len()");
        assert_eq!(pointers[0], 0, "pointers[0] must be 0");
        assert!(
            pointers.windows(2).all(|w| w[0] <= w[1]),
            "pointers must be non-decreasing"
        );
        assert_eq!(
            pointers[dim],
            indices.len(),
            "pointers[dim] must equal indices.len()"
        );

        for &idx in &indices {
            assert!(
                idx < secondary_dim,
                "Index {} out of bounds (secondary dimension = {})",
                idx,
                secondary_dim
            );
        }

        Self::from_raw_parts(n_rows, n_cols, layout, pointers, indices, values)
    }

    /// Assembles a matrix whose invariants the caller already established
    pub(crate) fn from_raw_parts(
        n_rows: usize,
        n_cols: usize,
        layout: Layout,
        pointers: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            n_rows,
            n_cols,
            layout,
            pointers,
            indices,
            values,
        }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize, layout: Layout) -> Self {
        let dim = layout.bucket_dim(n_rows, n_cols);
        Self::from_raw_parts(n_rows, n_cols, layout, vec![0; dim + 1], Vec::new(), Vec::new())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of buckets: rows for row-major, columns for column-major
    pub fn dim(&self) -> usize {
        self.pointers.len() - 1
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn pointers(&self) -> &[usize] {
        &self.pointers
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Values may be rewritten in place; the sparsity structure may not
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Returns an iterator over the entries of bucket `i`
    ///
    /// Each item is a tuple (secondary index, value).
    pub fn bucket(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.dim(), "Bucket index out of bounds");

        let start = self.pointers[i];
        let end = self.pointers[i + 1];

        self.indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&idx, val)| (idx, val))
    }

    /// Iterates every stored entry as (row, col, value) in storage order
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let layout = self.layout;
        self.pointers.windows(2).enumerate().flat_map(move |(bucket, w)| {
            (w[0]..w[1]).map(move |pos| {
                let (row, col) = layout.join(bucket, self.indices[pos]);
                (row, col, self.values[pos])
            })
        })
    }

    /// Borrows the storage under row-major names
    pub fn as_csr(&self) -> Result<CsrView<'_, T>> {
        CsrView::wrap(self)
    }

    /// Borrows the storage under column-major names
    pub fn as_csc(&self) -> Result<CscView<'_, T>> {
        CscView::wrap(self)
    }

    /// Re-buckets this matrix into `layout`
    ///
    /// Entries keep their storage order within each new bucket, so converting
    /// a row-major matrix to column-major leaves each column's rows ascending.
    pub fn to_layout(&self, layout: Layout) -> Result<CompressedMatrix<T>> {
        if layout == self.layout {
            return Ok(self.clone());
        }
        bucket_scatter(
            self.n_rows,
            self.n_cols,
            layout,
            self.nnz(),
            || self.triplets(),
            &MatrixConfig::default(),
        )
    }

    /// Expands to a dense array; duplicate entries are summed
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.n_rows, self.n_cols), T::zero());
        for (row, col, value) in self.triplets() {
            let cell = &mut dense[[row, col]];
            *cell = *cell + value;
        }
        dense
    }

    /// Decomposes the matrix into `(pointers, indices, values)`
    pub fn into_raw_storage(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.pointers, self.indices, self.values)
    }

    pub(crate) fn storage_mut(&mut self) -> (&[usize], &mut [usize], &mut [T]) {
        (&self.pointers, &mut self.indices, &mut self.values)
    }

    pub(crate) fn expect_layout(&self, expected: Layout) -> Result<()> {
        if self.layout == expected {
            Ok(())
        } else {
            Err(MatrixError::LayoutMismatch {
                expected: expected.name(),
                found: self.layout.name(),
            })
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CompressedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressedMatrix")
            .field("n_rows", &self.n_rows)
            .field("n_cols", &self.n_cols)
            .field("layout", &self.layout)
            .field("pointers", &self.pointers)
            .field("indices", &self.indices)
            .field("values", &self.values)
            .finish()
    }
}
