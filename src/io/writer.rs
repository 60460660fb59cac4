//! MatrixMarket coordinate writer

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MatrixError, Result};
use crate::matrix::header::BANNER;
use crate::matrix::{CompressedMatrix, MatrixValue};

/// Writes a matrix as `coordinate real general` with 1-based indices
///
/// Entries are emitted in storage order, bucket by bucket.
pub fn write_matrix_market<T, W>(mut writer: W, matrix: &CompressedMatrix<T>) -> Result<()>
where
    T: MatrixValue + Display,
    W: Write,
{
    writeln!(writer, "{} matrix coordinate real general", BANNER)?;
    writeln!(writer, "{} {} {}", matrix.n_rows(), matrix.n_cols(), matrix.nnz())?;

    for (row, col, value) in matrix.triplets() {
        writeln!(writer, "{} {} {}", row + 1, col + 1, value)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a matrix to a `.mtx` file, replacing any existing file
pub fn write_matrix_market_file<T, P>(path: P, matrix: &CompressedMatrix<T>) -> Result<()>
where
    T: MatrixValue + Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| MatrixError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    write_matrix_market(BufWriter::new(file), matrix)
}
