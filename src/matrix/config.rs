//! Configuration for reading and converting MatrixMarket matrices

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

/// The compressed layout produced by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Compressed sparse row: one pointer per row, column indices
    RowMajor,
    /// Compressed sparse column: one pointer per column, row indices
    ColumnMajor,
}

impl Layout {
    /// Number of buckets (and pointers minus one) for a matrix of the given shape
    pub fn bucket_dim(&self, n_rows: usize, n_cols: usize) -> usize {
        match self {
            Layout::RowMajor => n_rows,
            Layout::ColumnMajor => n_cols,
        }
    }

    /// Splits a (row, col) pair into (bucket, secondary index)
    #[inline]
    pub fn split(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Layout::RowMajor => (row, col),
            Layout::ColumnMajor => (col, row),
        }
    }

    /// Rebuilds a (row, col) pair from (bucket, secondary index)
    #[inline]
    pub fn join(&self, bucket: usize, secondary: usize) -> (usize, usize) {
        match self {
            Layout::RowMajor => (bucket, secondary),
            Layout::ColumnMajor => (secondary, bucket),
        }
    }

    /// The other compressed layout
    pub fn transposed(&self) -> Layout {
        match self {
            Layout::RowMajor => Layout::ColumnMajor,
            Layout::ColumnMajor => Layout::RowMajor,
        }
    }

    /// Short conventional name, `"CSR"` or `"CSC"`
    pub fn name(&self) -> &'static str {
        match self {
            Layout::RowMajor => "CSR",
            Layout::ColumnMajor => "CSC",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csr" | "row" | "row-major" | "rowmajor" => Ok(Layout::RowMajor),
            "csc" | "col" | "column" | "column-major" | "columnmajor" => Ok(Layout::ColumnMajor),
            _ => Err(MatrixError::UnsupportedLayout {
                layout: s.to_string(),
            }),
        }
    }
}

/// Options consumed by the reader and the converter
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// Keep only lower-triangular entries (`row >= col`) even for general matrices.
    /// The matrix is not checked for symmetry first.
    pub convert_to_triangular: bool,

    /// Value stored for every entry of a `pattern` matrix
    pub padding_value: f64,

    /// Sort secondary indices ascending within each bucket after conversion
    pub sort_indices: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            convert_to_triangular: false,
            padding_value: 0.0,
            sort_indices: false,
        }
    }
}

impl MatrixConfig {
    pub fn with_triangular(mut self, enabled: bool) -> Self {
        self.convert_to_triangular = enabled;
        self
    }

    pub fn with_padding_value(mut self, value: f64) -> Self {
        self.padding_value = value;
        self
    }

    pub fn with_sorted_indices(mut self, enabled: bool) -> Self {
        self.sort_indices = enabled;
        self
    }
}
