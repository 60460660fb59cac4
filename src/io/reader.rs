//! MatrixMarket coordinate reader
//!
//! Reads `%%MatrixMarket matrix coordinate <field> <symmetry>` files into a
//! [`CoordinateMatrix`]. Indices are converted from the file's 1-based
//! numbering to 0-based on storage.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use num_traits::{NumCast, ToPrimitive};

use crate::error::{MatrixError, Result};
use crate::io::tokens::{is_blank, is_comment, read_raw_line, Tokens};
use crate::matrix::header::{Banner, Field, MatrixMarketHeader, StorageFormat};
use crate::matrix::{CoordinateMatrix, MatrixConfig, MatrixValue};

/// Reads a `.mtx` file from disk
///
/// # Errors
///
/// [`MatrixError::FileOpen`] if the file cannot be opened, otherwise
/// anything [`read_matrix_market`] returns.
pub fn read_matrix_market_file<T, P>(path: P, config: &MatrixConfig) -> Result<CoordinateMatrix<T>>
where
    T: MatrixValue,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MatrixError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("reading MatrixMarket file {}", path.display());
    read_matrix_market(BufReader::new(file), config)
}

/// Reads a MatrixMarket coordinate stream
///
/// When the symmetry is not `general`, or `config.convert_to_triangular` is
/// set, only entries with `row >= col` are kept. Dropped entries still have
/// their value token consumed. Mirrored entries are never synthesized.
///
/// For `pattern` matrices every entry stores `config.padding_value` and no
/// value token is read.
pub fn read_matrix_market<T, R>(mut reader: R, config: &MatrixConfig) -> Result<CoordinateMatrix<T>>
where
    T: MatrixValue,
    R: BufRead,
{
    let (header, lines_read) = read_header(&mut reader)?;

    debug!(
        "MatrixMarket header: object={} format={:?} field={:?} symmetry={:?} size={}x{} nnz={}",
        header.object,
        header.format,
        header.field,
        header.symmetry,
        header.n_rows,
        header.n_cols,
        header.nnz
    );

    let padding = match header.field {
        Field::Pattern => Some(padding_value::<T>(config.padding_value)?),
        _ => None,
    };
    let lower_only = config.convert_to_triangular || !header.symmetry.is_general();

    let mut coo = CoordinateMatrix::with_declared_nnz(header.n_rows, header.n_cols, header.nnz);
    let mut tokens = Tokens::new(reader, lines_read);
    let mut dropped = 0usize;

    loop {
        let row = match tokens.next_token()? {
            Some((line, token)) => parse_index(token, line, "row", header.n_rows)?,
            None => break,
        };
        let col = match tokens.next_token()? {
            Some((line, token)) => parse_index(token, line, "column", header.n_cols)?,
            None => return Err(MatrixError::malformed(tokens.line_no(), "missing column index")),
        };

        // Read before filtering so a dropped entry does not leave its value on the stream
        let value = match padding {
            Some(padding) => padding,
            None => match tokens.next_token()? {
                Some((line, token)) => parse_value::<T>(token, line)?,
                None => return Err(MatrixError::malformed(tokens.line_no(), "missing value")),
            },
        };

        if lower_only && row < col {
            dropped += 1;
            continue;
        }

        coo.push(row, col, value)?;
    }

    if dropped > 0 {
        debug!("dropped {} upper-triangular entries", dropped);
    }
    if coo.len() + dropped != header.nnz {
        warn!(
            "size line declares {} entries but {} were read",
            header.nnz,
            coo.len() + dropped
        );
    }

    Ok(coo)
}

/// Reads the banner, skips comments and parses the size line
///
/// Returns the header together with the number of lines consumed.
fn read_header<R: BufRead>(reader: &mut R) -> Result<(MatrixMarketHeader, usize)> {
    let mut line = Vec::new();
    if read_raw_line(reader, &mut line)? == 0 {
        return Err(MatrixError::invalid_header("empty input"));
    }
    let mut lines_read = 1;

    let banner = Banner::parse(decode_header_line(&line, "banner")?.trim_end())?;

    match banner.format {
        StorageFormat::Coordinate => {}
        StorageFormat::Array => {
            return Err(MatrixError::UnsupportedFormat {
                format: "array".to_string(),
            })
        }
    }
    if banner.field == Field::Complex {
        return Err(MatrixError::UnsupportedField {
            field: "complex".to_string(),
        });
    }

    // Skip comments; the first other non-blank line is the size line
    loop {
        if read_raw_line(reader, &mut line)? == 0 {
            return Err(MatrixError::invalid_header("missing size line"));
        }
        lines_read += 1;

        if !is_blank(&line) && !is_comment(&line) {
            break;
        }
    }

    let header = banner.with_size_line(decode_header_line(&line, "size line")?)?;
    Ok((header, lines_read))
}

fn decode_header_line<'a>(line: &'a [u8], what: &str) -> Result<&'a str> {
    std::str::from_utf8(line)
        .map_err(|_| MatrixError::invalid_header(format!("{} is not valid UTF-8", what)))
}

fn padding_value<T: MatrixValue>(padding: f64) -> Result<T> {
    let unsupported = || MatrixError::UnsupportedField {
        field: format!("pattern (padding value {} does not fit the element type)", padding),
    };
    let value = <T as NumCast>::from(padding).ok_or_else(unsupported)?;

    // Integer element types truncate fractional values instead of failing
    if padding.fract() != 0.0 && value.to_f64().map_or(true, |v| v.fract() == 0.0) {
        return Err(unsupported());
    }
    Ok(value)
}

/// Parses a 1-based index and returns it 0-based
fn parse_index(token: &str, line: usize, what: &str, bound: usize) -> Result<usize> {
    let index = token
        .parse::<usize>()
        .map_err(|_| MatrixError::malformed(line, format!("invalid {} index '{}'", what, token)))?;

    if index == 0 || index > bound {
        return Err(MatrixError::malformed(
            line,
            format!("{} index {} outside 1..={}", what, index, bound),
        ));
    }
    Ok(index - 1)
}

fn parse_value<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|_| MatrixError::malformed(line, format!("invalid value '{}'", token)))
}
