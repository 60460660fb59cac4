//! MatrixMarket banner and size line

use log::warn;

use crate::error::{MatrixError, Result};

/// Literal token every MatrixMarket file starts with
pub const BANNER: &str = "%%MatrixMarket";

/// Storage format named in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// Sparse `row col [value]` triples
    Coordinate,
    /// Dense column-major listing
    Array,
}

/// Field kind named in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Real,
    Integer,
    Complex,
    /// Structure only; no value token on data lines
    Pattern,
}

/// Symmetry kind named in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
    /// Any other token; read as lower-triangle-only like the named kinds
    Unrecognized,
}

impl Symmetry {
    /// Whether only one triangle is expected to be stored in the file
    pub fn is_general(&self) -> bool {
        matches!(self, Symmetry::General)
    }
}

/// Parsed banner and size line of a MatrixMarket file
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixMarketHeader {
    pub object: String,
    pub format: StorageFormat,
    pub field: Field,
    pub symmetry: Symmetry,
    pub n_rows: usize,
    pub n_cols: usize,
    pub nnz: usize,
}

/// Banner tokens before the size line is known
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Banner {
    pub object: String,
    pub format: StorageFormat,
    pub field: Field,
    pub symmetry: Symmetry,
}

impl Banner {
    /// Parses `%%MatrixMarket <object> <format> <field> <symmetry>`
    ///
    /// Format and field are checked here so that unsupported files are
    /// rejected before any data line is read.
    pub fn parse(line: &str) -> Result<Self> {
        if !line.starts_with(BANNER) {
            return Err(MatrixError::invalid_header(format!(
                "first line must start with '{}'",
                BANNER
            )));
        }

        let mut tokens = line.split_whitespace();
        tokens.next(); // banner

        let mut next = |what: &str| {
            tokens
                .next()
                .map(|t| t.to_ascii_lowercase())
                .ok_or_else(|| MatrixError::invalid_header(format!("missing {} token", what)))
        };

        let object = next("object")?;
        let format = next("format")?;
        let field = next("field")?;
        let symmetry = next("symmetry")?;

        let format = match format.as_str() {
            "coordinate" => StorageFormat::Coordinate,
            "array" => StorageFormat::Array,
            other => {
                return Err(MatrixError::UnsupportedFormat {
                    format: other.to_string(),
                })
            }
        };

        let field = match field.as_str() {
            "real" | "double" => Field::Real,
            "integer" => Field::Integer,
            "pattern" => Field::Pattern,
            "complex" => Field::Complex,
            other => {
                return Err(MatrixError::UnsupportedField {
                    field: other.to_string(),
                })
            }
        };

        let symmetry = match symmetry.as_str() {
            "general" => Symmetry::General,
            "symmetric" => Symmetry::Symmetric,
            "skew-symmetric" => Symmetry::SkewSymmetric,
            "hermitian" => Symmetry::Hermitian,
            other => {
                warn!("unknown symmetry '{}', keeping the lower triangle only", other);
                Symmetry::Unrecognized
            }
        };

        Ok(Self {
            object,
            format,
            field,
            symmetry,
        })
    }

    /// Completes the header with the `<rows> <cols> <nonzeros>` size line
    pub fn with_size_line(self, line: &str) -> Result<MatrixMarketHeader> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(MatrixError::invalid_header(format!(
                "size line must hold 3 integers, found '{}'",
                line.trim()
            )));
        }

        let parse = |token: &str, what: &str| {
            token
                .parse::<usize>()
                .map_err(|_| MatrixError::invalid_header(format!("invalid {} '{}'", what, token)))
        };

        Ok(MatrixMarketHeader {
            object: self.object,
            format: self.format,
            field: self.field,
            symmetry: self.symmetry,
            n_rows: parse(parts[0], "number of rows")?,
            n_cols: parse(parts[1], "number of columns")?,
            nnz: parse(parts[2], "number of non-zeros")?,
        })
    }
}
