//! Error types for verbump

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::version::BumpLevel;

/// Result type alias for verbump operations
pub type Result<T> = std::result::Result<T, VersionError>;

/// Errors that can occur while reading, parsing or bumping a version
#[derive(Debug, Error)]
pub enum VersionError {
    /// The version file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bumped version could not be written back
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty version string")]
    Empty,

    /// A segment is not a base-10 signed 64-bit integer
    #[error("invalid {segment} segment {value:?}: {source}")]
    InvalidNumber {
        segment: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid version type: {0}")]
    InvalidBumpType(String),

    #[error("version component overflow: {0}")]
    Overflow(BumpLevel),
}
