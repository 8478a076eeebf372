use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, VersionError};

/// Rendered in place of a version whose major component is negative.
pub const INVALID_VERSION: &str = "%!s(INVALID_VERSION)";

/// Which component of a version to increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl BumpLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpLevel {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "patch" => Ok(BumpLevel::Patch),
            other => Err(VersionError::InvalidBumpType(other.to_string())),
        }
    }
}

/// A version of the form `major`, `major.minor` or `major.minor.patch`.
///
/// `None` marks a component that was absent from the parsed text, which is
/// distinct from a present component equal to zero: `"1.2"` has no patch and
/// renders back as `"1.2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: i64,
    pub minor: Option<i64>,
    pub patch: Option<i64>,
}

impl Version {
    pub fn new(major: i64, minor: Option<i64>, patch: Option<i64>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses `"2"`, `"2.3"` or `"0.10.11"`.
    ///
    /// The text is split into at most three segments, so anything after a
    /// third dot stays in the patch segment. Everything from the first `-`
    /// of the patch segment onwards is discarded (`"2.0.0-beta"` parses as
    /// `2.0.0`).
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut parts = text.splitn(3, '.');
        let major = match parts.next() {
            Some(segment) => parse_segment("major", segment)?,
            None => return Err(VersionError::Empty),
        };
        let minor = parts
            .next()
            .map(|segment| parse_segment("minor", segment))
            .transpose()?;
        let patch = parts
            .next()
            .map(|segment| {
                let number = segment.split_once('-').map_or(segment, |(head, _)| head);
                parse_segment("patch", number)
            })
            .transpose()?;

        let version = Self::new(major, minor, patch);
        debug!(input = text, ?version, "parsed version");
        Ok(version)
    }

    /// Returns the version with `level` incremented.
    ///
    /// - major: present minor and patch reset to 0, absent ones stay absent.
    /// - minor: an absent minor becomes 0 before incrementing, a present
    ///   patch resets to 0, an absent patch stays absent.
    /// - patch: an absent patch becomes 0 before incrementing.
    pub fn bump(self, level: BumpLevel) -> Result<Self> {
        let overflow = || VersionError::Overflow(level);

        let bumped = match level {
            BumpLevel::Major => Self {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: self.minor.map(|_| 0),
                patch: self.patch.map(|_| 0),
            },
            BumpLevel::Minor => Self {
                major: self.major,
                minor: Some(self.minor.unwrap_or(0).checked_add(1).ok_or_else(overflow)?),
                patch: self.patch.map(|_| 0),
            },
            BumpLevel::Patch => Self {
                patch: Some(self.patch.unwrap_or(0).checked_add(1).ok_or_else(overflow)?),
                ..self
            },
        };

        debug!(%level, from = %self, to = %bumped, "bumped version");
        Ok(bumped)
    }
}

fn parse_segment(segment: &'static str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|source| VersionError::InvalidNumber {
            segment,
            value: value.to_string(),
            source,
        })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.major, self.minor, self.patch) {
            (major, Some(minor), Some(patch)) if major >= 0 && minor >= 0 && patch >= 0 => {
                write!(f, "{major}.{minor}.{patch}")
            }
            (major, Some(minor), _) if major >= 0 && minor >= 0 => write!(f, "{major}.{minor}"),
            (major, _, _) if major >= 0 => write!(f, "{major}"),
            _ => f.write_str(INVALID_VERSION),
        }
    }
}

/// Strips every `"` from `value`, parses it and bumps the component named by
/// `level`.
///
/// The version is parsed before the bump type is checked, so an empty
/// version reports `Empty` even when `level` is also invalid.
pub fn change_version(level: &str, value: &str) -> Result<Version> {
    let unquoted = value.replace('"', "");
    let version = Version::parse(&unquoted)?;
    version.bump(level.parse()?)
}
