//! Windows opener using the shell's `start` builtin

use crate::error::Result;
use crate::system::opener::FileOpener;
use std::path::Path;
use std::process::Command;

pub struct WindowsOpener;

impl WindowsOpener {
    pub fn new() -> Self {
        Self
    }
}

impl FileOpener for WindowsOpener {
    fn name(&self) -> &'static str {
        "start"
    }

    fn open(&self, path: &Path) -> Result<()> {
        // The empty string is the window title; without it a quoted path is taken as the title.
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        super::run_launcher(command, path)
    }
}
