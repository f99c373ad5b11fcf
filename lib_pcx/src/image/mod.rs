pub mod decoder;
pub mod format;
pub mod header;

pub use decoder::{decode, DecodeError};
pub use header::HeaderError;
