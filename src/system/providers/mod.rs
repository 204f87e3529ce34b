//! Concrete file opener implementations

pub mod macos;
pub mod manual;
pub mod windows;
pub mod xdg;

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a launcher command and wait for it (not the opened application) to finish
pub(crate) fn run_launcher(mut command: Command, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let program = command.get_program().to_string_lossy().into_owned();
    tracing::info!(launcher = %program, path = %path.display(), "opening file");

    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| Error::Launch {
            command: program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::LauncherFailed {
            command: program,
            status,
        })
    }
}
