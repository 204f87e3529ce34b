//! Page abstraction and context

use super::input::Console;
use crate::config::HubConfig;
use crate::error::Result;
use crate::system::FileOpener;

/// Context passed to pages
pub struct PageContext {
    pub console: Console,
    pub opener: Box<dyn FileOpener>,
    pub config: HubConfig,
}

impl PageContext {
    pub fn new(console: Console, opener: Box<dyn FileOpener>, config: HubConfig) -> Self {
        Self {
            console,
            opener,
            config,
        }
    }
}

/// Page trait that all menu pages must implement
pub trait Page {
    /// Get the page title
    fn title(&self) -> &str;

    /// Render and handle the page, returning when control goes back to the menu
    fn render(&mut self, context: &mut PageContext) -> Result<()>;
}
