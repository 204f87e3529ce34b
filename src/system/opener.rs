//! File opener abstraction
//!
//! Maps "open this file with its default application" onto the launcher
//! native to each platform family.

use crate::error::Result;
use std::path::Path;

/// Platform-specific default-application launcher
pub trait FileOpener {
    /// Name of the opener
    fn name(&self) -> &'static str;

    /// Open `path` with the platform's default handler
    ///
    /// Returns once the launcher itself has finished, not the opened application.
    fn open(&self, path: &Path) -> Result<()>;
}

/// Host platform families with a known launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Freedesktop,
    Windows,
    Unknown,
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            Self::Freedesktop
        } else {
            Self::Unknown
        }
    }
}

/// File opener factory
pub struct FileOpenerFactory;

impl FileOpenerFactory {
    /// Detect the current platform and return the matching opener
    pub fn detect() -> Box<dyn FileOpener> {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Box<dyn FileOpener> {
        use crate::system::providers::{
            macos::MacOpener, manual::ManualOpener, windows::WindowsOpener, xdg::XdgOpener,
        };

        let opener: Box<dyn FileOpener> = match platform {
            Platform::MacOs => Box::new(MacOpener::new()),
            Platform::Freedesktop => Box::new(XdgOpener::new()),
            Platform::Windows => Box::new(WindowsOpener::new()),
            Platform::Unknown => Box::new(ManualOpener),
        };
        tracing::debug!(?platform, opener = opener.name(), "selected file opener");
        opener
    }
}
