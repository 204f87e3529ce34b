//! Concrete page implementations

pub mod browse_page;
pub mod comparison_page;
pub mod comprehensive_page;
pub mod main_page;
pub mod quickstart_page;

pub use browse_page::BrowsePage;
pub use comparison_page::ComparisonPage;
pub use comprehensive_page::ComprehensivePage;
pub use main_page::MainPage;
pub use quickstart_page::QuickstartPage;

/// Prompt that holds an informational page until Enter is pressed
pub const RETURN_PROMPT: &str = "Press Enter to return to main menu...";

#[cfg(test)]
pub(crate) mod testing {
    //! Test doubles shared by page tests

    use crate::config::HubConfig;
    use crate::error::Result;
    use crate::menu::framework::{Console, PageContext};
    use crate::system::FileOpener;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    /// Opener that records every path instead of launching anything
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingOpener {
        pub fn opened(&self) -> Vec<String> {
            self.opened.borrow().clone()
        }
    }

    impl FileOpener for RecordingOpener {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn open(&self, path: &Path) -> Result<()> {
            self.opened
                .borrow_mut()
                .push(path.to_string_lossy().into_owned());
            Ok(())
        }
    }

    /// Headless context whose materials root leaves course paths untouched
    pub fn context_with(console: Console, opener: &RecordingOpener) -> PageContext {
        PageContext::new(console, Box::new(opener.clone()), HubConfig::headless(""))
    }
}
