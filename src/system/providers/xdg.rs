//! Freedesktop opener using `xdg-open`

use crate::error::Result;
use crate::system::opener::FileOpener;
use std::path::Path;
use std::process::Command;

pub struct XdgOpener;

impl XdgOpener {
    pub fn new() -> Self {
        Self
    }
}

impl FileOpener for XdgOpener {
    fn name(&self) -> &'static str {
        "xdg-open"
    }

    fn open(&self, path: &Path) -> Result<()> {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        super::run_launcher(command, path)
    }
}
