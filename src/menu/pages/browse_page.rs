//! Browse all materials page

use super::RETURN_PROMPT;
use crate::error::Result;
use crate::menu::courses::{COMPARISON_GUIDE, COMPREHENSIVE_DIR, QUICKSTART_DIR};
use crate::menu::framework::{
    ContentArea, Layout, LayoutComponents, Page, PageContext, StandardLayout, TOOL_TITLE,
};

pub struct BrowsePage {
    layout: StandardLayout,
}

impl BrowsePage {
    pub fn new() -> Self {
        Self {
            layout: StandardLayout,
        }
    }
}

impl Page for BrowsePage {
    fn title(&self) -> &str {
        "Browse"
    }

    fn render(&mut self, context: &mut PageContext) -> Result<()> {
        let quickstart = format!("{}/ - Fast-track learning materials", QUICKSTART_DIR);
        let comprehensive = format!("{}/ - Deep expertise materials", COMPREHENSIVE_DIR);
        let comparison = format!("{} - Help choosing your path", COMPARISON_GUIDE);

        let listing = ContentArea::new()
            .add_section(
                "Available directories:",
                &[
                    quickstart.as_str(),
                    comprehensive.as_str(),
                    comparison.as_str(),
                ],
            )
            .add_line("Feel free to explore at your own pace!");
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title("📁 Browse All Materials")
            .add_content(listing);

        self.layout.render(components, context)?;
        context.console.pause(RETURN_PROMPT)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::framework::input::testing::scripted_console;
    use crate::menu::pages::testing::{RecordingOpener, context_with};

    #[test]
    fn test_lists_materials_without_opening() {
        let (console, buffer) = scripted_console(&[""]);
        let opener = RecordingOpener::default();
        let mut context = context_with(console, &opener);

        BrowsePage::new().render(&mut context).unwrap();

        assert!(opener.opened().is_empty());
        let output = buffer.contents();
        assert!(output.contains("• 2hr-quickstart/ - Fast-track learning materials"));
        assert!(output.contains("• 5day-comprehensive/ - Deep expertise materials"));
        assert!(output.contains("• course-comparison.md - Help choosing your path"));
        assert!(output.contains("Feel free to explore at your own pace!"));
    }
}
