//! Course comparison page

use super::RETURN_PROMPT;
use crate::error::Result;
use crate::menu::courses::COMPARISON_GUIDE;
use crate::menu::framework::{Layout, LayoutComponents, Page, PageContext, StandardLayout, TOOL_TITLE};
use crate::system::open_file;
use colored::*;

pub struct ComparisonPage {
    layout: StandardLayout,
}

impl ComparisonPage {
    pub fn new() -> Self {
        Self {
            layout: StandardLayout,
        }
    }
}

impl Page for ComparisonPage {
    fn title(&self) -> &str {
        "Comparison"
    }

    fn render(&mut self, context: &mut PageContext) -> Result<()> {
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title("🤔 Course Comparison & Decision Guide");

        self.layout.render(components, context)?;

        context.console.line("Opening detailed comparison guide...")?;
        open_file(
            &mut context.console,
            context.opener.as_ref(),
            &context.config,
            COMPARISON_GUIDE,
        )?;
        context
            .console
            .line("✅ Check your file browser for the comparison guide!".bright_green())?;
        context.console.blank()?;
        context.console.pause(RETURN_PROMPT)?;

        Ok(())
    }
}
