//! 5-day comprehensive workshop page

use super::QuickstartPage;
use crate::error::Result;
use crate::menu::courses::COMPREHENSIVE_README;
use crate::menu::framework::{
    ContentArea, Layout, LayoutComponents, Page, PageContext, StandardLayout, TOOL_TITLE,
};
use crate::system::open_file;
use colored::*;

pub struct ComprehensivePage {
    layout: StandardLayout,
}

impl ComprehensivePage {
    pub fn new() -> Self {
        Self {
            layout: StandardLayout,
        }
    }
}

impl Page for ComprehensivePage {
    fn title(&self) -> &str {
        "Comprehensive"
    }

    fn render(&mut self, context: &mut PageContext) -> Result<()> {
        let prerequisites = ContentArea::new().add_section(
            "⚠️  Important Prerequisites:".bright_yellow().to_string(),
            &[
                "Completed 2-hour quickstart OR 6+ months Python experience",
                "40 hours available for dedicated learning",
                "AWS account with Bedrock access",
                "Serious commitment to mastering AI agents",
            ],
        );
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title("📚 5-Day Comprehensive Workshop Selected!")
            .add_content(prerequisites);

        self.layout.render(components, context)?;

        if context
            .console
            .confirm("Do you meet these prerequisites? (y/n): ")?
        {
            context.console.blank()?;
            context
                .console
                .line("📂 Opening comprehensive workshop materials...")?;
            open_file(
                &mut context.console,
                context.opener.as_ref(),
                &context.config,
                COMPREHENSIVE_README,
            )?;
            context.console.line(
                "✅ Check your file browser for the comprehensive guide!".bright_green(),
            )?;
        } else {
            context.console.blank()?;
            context
                .console
                .line("💡 Recommendation: Start with the 2-hour quickstart first!")?;
            if context
                .console
                .confirm("Would you like to try the quickstart instead? (y/n): ")?
            {
                // Direct call: control comes back here, then to the main loop
                tracing::debug!("redirecting to quickstart");
                QuickstartPage::new().render(context)?;
            }
        }

        Ok(())
    }
}
