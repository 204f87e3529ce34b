//! Fallback for platforms without a known launcher

use crate::error::{Error, Result};
use crate::system::opener::FileOpener;
use std::path::Path;

pub struct ManualOpener;

impl FileOpener for ManualOpener {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn open(&self, _path: &Path) -> Result<()> {
        Err(Error::UnsupportedPlatform)
    }
}
