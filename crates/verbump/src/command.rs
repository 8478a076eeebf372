use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, info};
use verbump::{change_version, Version, VersionFile};

use crate::cli::{Cli, Invocation, USAGE};

/// Bump the version held in the version file at `path`, optionally writing
/// the result back.
pub fn bump_version_file(path: &Path, level: &str, write: bool) -> Result<Version> {
    let file = VersionFile::read(path)?;
    let version = change_version(level, file.contents())?;
    if write {
        file.write(&version)?;
    }
    Ok(version)
}

pub fn handle_command(cli: Cli) -> ExitCode {
    let result: Result<Version> = match cli.invocation() {
        Invocation::Usage => return emit(USAGE),
        Invocation::FromFile { level } => {
            info!(file = %cli.file.display(), bump = level, "bumping version file");
            bump_version_file(&cli.file, level, cli.write)
        }
        Invocation::Explicit { level, version } => {
            if cli.write {
                debug!("--write has no effect when a version is given");
            }
            change_version(level, version).map_err(Into::into)
        }
    };

    report(result)
}

fn report(result: Result<Version>) -> ExitCode {
    match result {
        Ok(version) => emit(version),
        Err(e) => {
            eprint!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Write `output` to stdout with no trailing newline. A failed write or flush
/// is reported on stderr.
fn emit(output: impl Display) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    let written = stdout
        .write_all(output.to_string().as_bytes())
        .and_then(|()| stdout.flush());

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("failed to write to stdout: {e}");
            ExitCode::FAILURE
        }
    }
}
