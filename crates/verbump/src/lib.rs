//! verbump
//!
//! Parses versions of the form `major`, `major.minor` or `major.minor.patch`,
//! bumps one component with semantic-versioning rollover and renders the
//! result with the same number of components it was given (plus any
//! component the bump had to create).
//!
//! ```
//! use verbump::{BumpLevel, Version};
//!
//! let version = Version::parse("1.2.3").unwrap().bump(BumpLevel::Minor).unwrap();
//! assert_eq!(version.to_string(), "1.3.0");
//! ```

mod error;
mod version;
mod version_file;

pub use error::{Result, VersionError};
pub use version::{change_version, BumpLevel, Version, INVALID_VERSION};
pub use version_file::{VersionFile, VERSION_FILE};
