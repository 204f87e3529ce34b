//! Unified error model
//!
//! Top-level error type for the learning hub navigator

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Crate error enum
#[derive(Debug, Error)]
pub enum Error {
    // ========== Terminal I/O ==========
    /// I/O error while talking to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user pressed Ctrl+C at a prompt
    #[error("Input interrupted")]
    Interrupted,

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,

    // ========== File opening ==========
    /// Target of an open request does not exist
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Launcher command could not be spawned
    #[error("Failed to run {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Launcher command ran but reported failure
    #[error("{command} exited with {status}")]
    LauncherFailed { command: String, status: ExitStatus },

    /// No launcher exists for the host platform
    #[error("No file launcher available for this platform")]
    UnsupportedPlatform,
}

/// Unified result type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map an I/O error from a prompt, folding Ctrl+C into [`Error::Interrupted`]
    pub fn from_prompt_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::Interrupted => Self::Interrupted,
            std::io::ErrorKind::UnexpectedEof => Self::InputClosed,
            _ => Self::Io(err),
        }
    }

    /// Whether this error means the user left the program
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Interrupted | Self::InputClosed)
    }
}
