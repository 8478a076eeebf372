use std::path::PathBuf;

use clap::Parser;
use verbump::VERSION_FILE;

pub const USAGE: &str = "Usage: go run <VERSION> <major|minor|patch>";

#[derive(Parser, Debug)]
#[command(name = "verbump", version)]
#[command(about = "Bump the major, minor or patch component of a version")]
#[command(
    long_about = "verbump increments one component of a version read from a VERSION file, or given on the command line, and prints the new version."
)]
pub struct Cli {
    /// The part of the version to bump (major, minor or patch), optionally
    /// followed by the version to bump instead of the version file's content
    #[clap(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Version file read when no version is given
    #[clap(long, short = 'f', env = "VERBUMP_FILE", default_value = VERSION_FILE)]
    pub file: PathBuf,

    /// Write the bumped version back to the version file
    #[clap(long, short = 'w')]
    pub write: bool,
}

/// What the positional arguments ask for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation<'a> {
    FromFile { level: &'a str },
    Explicit { level: &'a str, version: &'a str },
    Usage,
}

impl Cli {
    pub fn invocation(&self) -> Invocation<'_> {
        match self.args.as_slice() {
            [level] => Invocation::FromFile { level },
            [level, version] => Invocation::Explicit { level, version },
            _ => Invocation::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("verbump").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_invocation_shapes() {
        assert_eq!(parse(&[]).invocation(), Invocation::Usage);
        assert_eq!(
            parse(&["patch"]).invocation(),
            Invocation::FromFile { level: "patch" }
        );
        assert_eq!(
            parse(&["minor", "1.2.3"]).invocation(),
            Invocation::Explicit {
                level: "minor",
                version: "1.2.3"
            }
        );
        assert_eq!(parse(&["major", "1", "2"]).invocation(), Invocation::Usage);
    }

    #[test]
    fn test_bump_type_is_not_validated_by_clap() {
        assert_eq!(
            parse(&["bogus"]).invocation(),
            Invocation::FromFile { level: "bogus" }
        );
    }

    #[test]
    fn test_write_flag() {
        let cli = parse(&["--write", "patch"]);
        assert!(cli.write);
        assert_eq!(cli.args, vec!["patch".to_string()]);
    }

    #[test]
    fn test_negative_version_is_positional() {
        let cli = parse(&["major", "-1", "--write"]);
        assert!(cli.write);
        assert_eq!(
            cli.invocation(),
            Invocation::Explicit {
                level: "major",
                version: "-1"
            }
        );
    }
}
