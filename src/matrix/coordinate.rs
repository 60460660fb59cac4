//! Coordinate (COO) list produced by the MatrixMarket reader

use std::fmt;

use crate::error::{MatrixError, Result};
use crate::matrix::compressed::CompressedMatrix;
use crate::matrix::config::{Layout, MatrixConfig};
use crate::matrix::conversion::convert;
use crate::matrix::MatrixValue;

/// Upper bound on entries reserved up front from an untrusted size line
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 20;

/// A single stored entry, 0-based
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// An ordered sequence of (row, col, value) entries with matrix dimensions
///
/// Insertion order is preserved and later determines placement order
/// inside each bucket of the compressed layout. Every stored entry lies
/// inside `n_rows × n_cols`; duplicates are kept as separate entries.
#[derive(Clone, PartialEq)]
pub struct CoordinateMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    declared_nnz: usize,
    entries: Vec<Entry<T>>,
}

impl<T: MatrixValue> CoordinateMatrix<T> {
    /// Creates an empty coordinate list for an `n_rows × n_cols` matrix
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self::with_declared_nnz(n_rows, n_cols, 0)
    }

    /// Creates an empty coordinate list, reserving room for `declared_nnz` entries
    pub fn with_declared_nnz(n_rows: usize, n_cols: usize, declared_nnz: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            declared_nnz,
            entries: Vec::with_capacity(declared_nnz.min(MAX_PREALLOCATED_ENTRIES)),
        }
    }

    /// Appends an entry, rejecting indices outside the matrix
    pub fn push(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(MatrixError::MalformedEntry {
                line: 0,
                reason: format!(
                    "entry ({}, {}) out of bounds for {} × {} matrix",
                    row, col, self.n_rows, self.n_cols
                ),
            });
        }
        self.entries.push(Entry::new(row, col, value));
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Non-zero count announced by the size line; may exceed `len()`
    /// once upper-triangular entries have been dropped
    pub fn declared_nnz(&self) -> usize {
        self.declared_nnz
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Converts into a compressed layout, consuming the coordinate list
    pub fn into_compressed(self, layout: Layout, config: &MatrixConfig) -> Result<CompressedMatrix<T>> {
        convert(&self, layout, config)
    }
}

impl<T: fmt::Debug> fmt::Debug for CoordinateMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CoordinateMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {} (declared {})", self.entries.len(), self.declared_nnz)?;

        let max_entries = 10.min(self.entries.len());
        for entry in &self.entries[..max_entries] {
            writeln!(f, "    ({}, {}) {:?}", entry.row, entry.col, entry.value)?;
        }
        if self.entries.len() > max_entries {
            writeln!(f, "    ... ({} more)", self.entries.len() - max_entries)?;
        }

        write!(f, "}}")
    }
}
