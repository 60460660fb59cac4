//! Compressed Sparse Column (CSC) view over a [`CompressedMatrix`]

use std::fmt;

use crate::error::Result;
use crate::matrix::compressed::CompressedMatrix;
use crate::matrix::config::Layout;
use crate::matrix::MatrixValue;

/// A column-major matrix under CSC names
///
/// - col_pointers: size n_cols + 1, column j occupies `col_pointers[j]..col_pointers[j + 1]`
/// - row_indices: size nnz, row of each stored entry
/// - values: size nnz
#[derive(Clone, Copy)]
pub struct CscView<'a, T> {
    matrix: &'a CompressedMatrix<T>,
}

impl<'a, T: MatrixValue> CscView<'a, T> {
    /// Wraps a column-major matrix
    pub fn wrap(matrix: &'a CompressedMatrix<T>) -> Result<Self> {
        matrix.expect_layout(Layout::ColumnMajor)?;
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

    pub fn col_pointers(&self) -> &'a [usize] {
        self.matrix.pointers()
    }

    pub fn row_indices(&self) -> &'a [usize] {
        self.matrix.indices()
    }

    pub fn values(&self) -> &'a [T] {
        self.matrix.values()
    }

    /// Returns an iterator over the stored elements in column j
    ///
    /// Each item is a tuple (row_idx, value)
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &'a T)> {
        assert!(j < self.n_cols(), "Column index out of bounds");
        self.matrix.bucket(j)
    }

    pub fn inner(&self) -> &'a CompressedMatrix<T> {
        self.matrix
    }
}

impl<T: MatrixValue> fmt::Debug for CscView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CscView {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows(), self.n_cols())?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_cols_to_print = 5.min(self.n_cols());

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let col: Vec<_> = self.col_iter(j).collect();

                if col.is_empty() {
                    writeln!(f, "(empty)")?;
                } else {
                    for (row, val) in col.iter().take(5) {
                        write!(f, "({}, {:?}) ", row, val)?;
                    }
                    if col.len() > 5 {
                        write!(f, "... ({} more)", col.len() - 5)?;
                    }
                    writeln!(f)?;
                }
            }

            if self.n_cols() > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols() - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
