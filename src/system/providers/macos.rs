//! macOS opener using `open`

use crate::error::Result;
use crate::system::opener::FileOpener;
use std::path::Path;
use std::process::Command;

pub struct MacOpener;

impl MacOpener {
    pub fn new() -> Self {
        Self
    }
}

impl FileOpener for MacOpener {
    fn name(&self) -> &'static str {
        "open"
    }

    fn open(&self, path: &Path) -> Result<()> {
        let mut command = Command::new("open");
        command.arg(path);
        super::run_launcher(command, path)
    }
}
