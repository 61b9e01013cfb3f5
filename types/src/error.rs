//! Errors raised while decoding names.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is {len} bytes, longer than the 32-byte limit")]
    TooLong { len: usize },

    #[error("hex name must have 64 digits, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid hex name: {0}")]
    InvalidHex(String),
}
