//! Helper functions for system operations

use super::opener::FileOpener;
use crate::config::HubConfig;
use crate::error::{Error, Result};
use crate::menu::framework::Console;
use colored::*;

/// Open a course file, telling the user how to open it manually on any failure
///
/// Launch failures are reported to the user and never returned. The only
/// error out of this function is failing to write to the console.
pub fn open_file(
    console: &mut Console,
    opener: &dyn FileOpener,
    config: &HubConfig,
    relative: &str,
) -> Result<()> {
    let path = config.resolve(relative);

    match opener.open(&path) {
        Ok(()) => Ok(()),
        Err(Error::UnsupportedPlatform) => {
            tracing::warn!(opener = opener.name(), "no launcher for this platform");
            console.line(format!("Please manually open: {}", relative).yellow())
        }
        Err(e) => {
            tracing::warn!(opener = opener.name(), path = %path.display(), error = %e, "failed to open file");
            console.line(
                format!("Could not open file automatically. Please open: {}", relative).yellow(),
            )
        }
    }
}
