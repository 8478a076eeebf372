use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, VersionError};
use crate::version::Version;

/// Default version file, relative to the working directory.
pub const VERSION_FILE: &str = "VERSION";

/// A version file holding a single, optionally quoted, version string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
    raw: String,
}

impl VersionFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).map_err(|source| VersionError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "read version file");
        Ok(Self { path, raw })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content with surrounding whitespace trimmed. Quotes are kept.
    pub fn contents(&self) -> &str {
        self.raw.trim()
    }

    pub fn is_quoted(&self) -> bool {
        let contents = self.contents();
        contents.len() >= 2 && contents.starts_with('"') && contents.ends_with('"')
    }

    /// Replaces the file content with `version`, keeping the original quoting
    /// and trailing newline.
    pub fn write(&self, version: &Version) -> Result<()> {
        let mut content = if self.is_quoted() {
            format!("\"{version}\"")
        } else {
            version.to_string()
        };
        if self.raw.ends_with('\n') {
            content.push('\n');
        }

        fs::write(&self.path, &content).map_err(|source| VersionError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), %version, "updated version file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn version_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VERSION_FILE);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_trims_whitespace() {
        let (_dir, path) = version_file("  1.2.3\n\n");
        let file = VersionFile::read(&path).unwrap();
        assert_eq!(file.contents(), "1.2.3");
        assert!(!file.is_quoted());
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = VersionFile::read(dir.path().join(VERSION_FILE)).unwrap_err();
        assert!(matches!(err, VersionError::Read { .. }));
        assert!(err.to_string().contains(VERSION_FILE));
    }

    #[test]
    fn test_write_keeps_quotes_and_newline() {
        let (_dir, path) = version_file("\"0.9.1\"\n");
        let file = VersionFile::read(&path).unwrap();
        assert!(file.is_quoted());

        file.write(&Version::new(0, Some(10), Some(0))).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"0.10.0\"\n");
    }

    #[test]
    fn test_write_plain() {
        let (_dir, path) = version_file("4");
        let file = VersionFile::read(&path).unwrap();

        file.write(&Version::new(5, None, None)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "5");
    }
}
