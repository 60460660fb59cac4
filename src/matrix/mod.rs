// Matrix data structures and layout conversion

pub mod compressed;
pub mod config;
pub mod conversion;
pub mod coordinate;
pub mod csc;
pub mod csr;
pub mod header;

use std::fmt::Debug;
use std::str::FromStr;

use num_traits::{Num, NumCast};

pub use compressed::CompressedMatrix;
pub use config::{Layout, MatrixConfig};
pub use conversion::{convert, convert_to_csc, convert_to_csr};
pub use coordinate::{CoordinateMatrix, Entry};
pub use csc::CscView;
pub use csr::CsrView;
pub use header::{Field, MatrixMarketHeader, StorageFormat, Symmetry};

/// Element types a matrix can be read into and converted with
pub trait MatrixValue: Copy + Num + NumCast + FromStr + Debug {}

impl<T> MatrixValue for T where T: Copy + Num + NumCast + FromStr + Debug {}
