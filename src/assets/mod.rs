//! # Asset Loading
//!
//! Synchronous, one-shot loaders for the two external file formats: the
//! binary triangle-soup model format and the binary PPM texture format.
//! Loading happens once at primitive construction; malformed input is
//! reported as a typed [`AssetError`] and recovered at the call site with
//! partial or empty data rather than aborting.

pub mod model;
pub mod texture;

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the model and texture loaders.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: too short for an 84-byte triangle-soup header")]
    TruncatedHeader { path: PathBuf },

    #[error("{path}: not a P6 PPM file")]
    BadMagic { path: PathBuf },

    #[error("{path}: malformed header field")]
    MalformedHeader { path: PathBuf },

    #[error("{path}: unsupported max channel value {max} (must be 255)")]
    UnsupportedDepth { path: PathBuf, max: u32 },

    #[error("{path}: pixel data truncated")]
    TruncatedPixels { path: PathBuf },
}
