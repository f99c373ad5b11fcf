pub mod rle;

pub use rle::{decompress, RleDecompressionError};
