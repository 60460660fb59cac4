//! Compressed Sparse Row (CSR) view over a [`CompressedMatrix`]

use std::fmt;

use crate::error::Result;
use crate::matrix::compressed::CompressedMatrix;
use crate::matrix::config::Layout;
use crate::matrix::MatrixValue;

/// A row-major matrix under CSR names
///
/// The view borrows the matrix storage; `row_pointers()` and `col_indices()`
/// return the very slices behind `CompressedMatrix::pointers()` and
/// `CompressedMatrix::indices()`:
/// - row_pointers: size n_rows + 1, row i occupies `row_pointers[i]..row_pointers[i + 1]`
/// - col_indices: size nnz, column of each stored entry
/// - values: size nnz
#[derive(Clone, Copy)]
pub struct CsrView<'a, T> {
    matrix: &'a CompressedMatrix<T>,
}

impl<'a, T: MatrixValue> CsrView<'a, T> {
    /// Wraps a row-major matrix
    ///
    /// Fails with `LayoutMismatch` if the matrix is stored column-major.
    pub fn wrap(matrix: &'a CompressedMatrix<T>) -> Result<Self> {
        matrix.expect_layout(Layout::RowMajor)?;
        Ok(Self { matrix })
    }

    pub fn n_rows(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn n_cols(&self) -> usize {
        self.matrix.n_cols()
    }

    pub fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    pub fn row_pointers(&self) -> &'a [usize] {
        self.matrix.pointers()
    }

    pub fn col_indices(&self) -> &'a [usize] {
        self.matrix.indices()
    }

    pub fn values(&self) -> &'a [T] {
        self.matrix.values()
    }

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &'a T)> {
        assert!(i < self.n_rows(), "Row index out of bounds");
        self.matrix.bucket(i)
    }

    /// The underlying storage
    pub fn inner(&self) -> &'a CompressedMatrix<T> {
        self.matrix
    }
}

impl<T: MatrixValue> fmt::Debug for CsrView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CsrView {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows(), self.n_cols())?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let row: Vec<_> = self.row_iter(i).collect();

                if row.is_empty() {
                    writeln!(f, "(empty)")?;
                } else {
                    for (col, val) in row.iter().take(5) {
                        write!(f, "({}, {:?}) ", col, val)?;
                    }
                    if row.len() > 5 {
                        write!(f, "... ({} more)", row.len() - 5)?;
                    }
                    writeln!(f)?;
                }
            }

            if self.n_rows() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
