//! # Matrix Factory: MatrixMarket to CSR/CSC
//!
//! Reads sparse matrices in the MatrixMarket coordinate format and converts
//! them into compressed row (CSR) or compressed column (CSC) storage ready
//! for numerical kernels.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! 1. **Coordinate reader** ([`read_matrix_market`]): validates the banner,
//!    skips comments, reads the size line and streams `row col [value]`
//!    entries into a [`CoordinateMatrix`]. Symmetric matrices keep only
//!    their lower triangle; pattern matrices store a padding value.
//!
//! 2. **Layout converter** ([`convert`]): a stable counting sort that
//!    buckets entries by row or column into pointer, index and value arrays.
//!
//! 3. **Views** ([`CsrView`], [`CscView`]): layout-specific names over the
//!    converter's [`CompressedMatrix`] without copying it.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use matrix_factory::{read_matrix_market, convert, Layout, MatrixConfig};
//!
//! let text = "%%MatrixMarket matrix coordinate real general\n\
//!             3 3 3\n\
//!             1 1 1.0\n\
//!             2 2 2.0\n\
//!             3 3 3.0\n";
//!
//! let config = MatrixConfig::default();
//! let coo = read_matrix_market::<f64, _>(Cursor::new(text), &config)?;
//! let matrix = convert(&coo, Layout::RowMajor, &config)?;
//!
//! let csr = matrix.as_csr()?;
//! assert_eq!(csr.row_pointers(), &[0, 1, 2, 3]);
//! assert_eq!(csr.col_indices(), &[0, 1, 2]);
//! # Ok::<(), matrix_factory::MatrixError>(())
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;

#[cfg(feature = "device")]
pub mod device;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use io::{read_matrix_market, read_matrix_market_file, write_matrix_market, write_matrix_market_file};
pub use matrix::{convert, convert_to_csc, convert_to_csr};
pub use matrix::{CompressedMatrix, CoordinateMatrix, CscView, CsrView, Entry};
pub use matrix::{Field, Layout, MatrixConfig, MatrixMarketHeader, MatrixValue, StorageFormat, Symmetry};
pub use utils::{from_sprs, to_sprs};

#[cfg(feature = "device")]
pub use device::{DeviceStager, HostStager, StagedMatrix};

/// Reads a `.mtx` file and converts it to `layout` in one call
pub fn load_compressed<T, P>(path: P, layout: Layout, config: &MatrixConfig) -> Result<CompressedMatrix<T>>
where
    T: MatrixValue,
    P: AsRef<std::path::Path>,
{
    read_matrix_market_file(path, config)?.into_compressed(layout, config)
}

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
