//! Screen management utilities

use std::io::{self, Write};

/// Clear screen utility
pub struct Screen;

impl Screen {
    /// Clear the screen using the most appropriate method
    ///
    /// When clearing is disabled only some padding is written.
    pub fn clear(out: &mut dyn Write, enabled: bool) -> io::Result<()> {
        if !enabled {
            return Self::pad(out);
        }

        // Try different clearing methods for maximum compatibility
        if Self::try_ansi_clear(out)? {
            return Ok(());
        }

        // Fallback: try using the platform's clear command
        out.flush()?;
        if Self::try_command_clear() {
            return Ok(());
        }

        Self::pad(out)
    }

    fn pad(out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\n\n")
    }

    /// Try to clear using ANSI escape codes
    fn try_ansi_clear(out: &mut dyn Write) -> io::Result<bool> {
        match std::env::var("TERM") {
            Ok(term)
                if term.contains("xterm") || term.contains("screen") || term.contains("tmux") =>
            {
                write!(out, "\x1B[2J\x1B[1;1H")?;
                out.flush()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Try to clear using system command
    fn try_command_clear() -> bool {
        #[cfg(unix)]
        let status = std::process::Command::new("clear").status();

        #[cfg(windows)]
        let status = std::process::Command::new("cmd").args(["/C", "cls"]).status();

        #[cfg(not(any(unix, windows)))]
        let status: io::Result<std::process::ExitStatus> =
            Err(io::Error::from(io::ErrorKind::Unsupported));

        status.map(|s| s.success()).unwrap_or(false)
    }
}
