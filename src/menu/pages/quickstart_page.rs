//! 2-hour quickstart course page

use crate::error::Result;
use crate::menu::courses::{QUICKSTART_DIR, QUICKSTART_README};
use crate::menu::framework::{
    ContentArea, Layout, LayoutComponents, Page, PageContext, StandardLayout, TOOL_TITLE,
};
use crate::system::open_file;
use colored::*;

pub struct QuickstartPage {
    layout: StandardLayout,
}

impl QuickstartPage {
    pub fn new() -> Self {
        Self {
            layout: StandardLayout,
        }
    }
}

impl Page for QuickstartPage {
    fn title(&self) -> &str {
        "Quickstart"
    }

    fn render(&mut self, context: &mut PageContext) -> Result<()> {
        let checklist = ContentArea::new().add_steps(
            "Next steps:",
            &[
                "✅ Setup your environment (30 min)",
                "🎯 Follow the implementation guide (120 min)",
                "🧪 Use code templates for practice",
                "🏆 Complete assessment for certification",
            ],
        );
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title("🚀 2-Hour Quickstart Course Selected!")
            .add_content(checklist);

        self.layout.render(components, context)?;

        if context.console.confirm("Ready to start? (y/n): ")? {
            context.console.blank()?;
            context.console.line("📂 Opening quickstart materials...")?;
            open_file(
                &mut context.console,
                context.opener.as_ref(),
                &context.config,
                QUICKSTART_README,
            )?;
            context.console.line(
                "✅ Check your file browser for the quickstart guide!".bright_green(),
            )?;
        } else {
            context.console.line(format!(
                "No problem! Materials are in the '{}' folder when you're ready.",
                QUICKSTART_DIR
            ))?;
        }

        Ok(())
    }
}
