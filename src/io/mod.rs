//! MatrixMarket text input and output

pub mod reader;
mod tokens;
pub mod writer;

pub use reader::{read_matrix_market, read_matrix_market_file};
pub use writer::{write_matrix_market, write_matrix_market_file};
