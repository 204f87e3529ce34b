//! Runtime settings for a navigator session

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// Environment variable that disables screen clearing
pub const NO_CLEAR_SCREEN_ENV: &str = "NO_CLEAR_SCREEN";

/// Settings resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Directory the course paths are resolved against
    pub root: PathBuf,
    /// Whether pages clear the screen before rendering
    pub clear_screen: bool,
}

impl HubConfig {
    /// Build settings from parsed arguments, the environment and the terminal
    pub fn from_cli(cli: &Cli) -> Self {
        let clear_screen = !cli.no_clear
            && std::env::var_os(NO_CLEAR_SCREEN_ENV).is_none()
            && console::Term::stdout().is_term();

        Self {
            root: cli.root.clone(),
            clear_screen,
        }
    }

    /// Settings for a headless session (no clearing)
    pub fn headless(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clear_screen: false,
        }
    }

    /// Resolve a course-relative path against the materials root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
