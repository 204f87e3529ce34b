//! main page implementation

use crate::error::Result;
use crate::menu::choice::MenuChoice;
use crate::menu::framework::{
    Layout, LayoutComponents, MenuItem, MenuList, PageContext, StandardLayout, TOOL_TITLE,
};
use colored::*;

pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";

pub struct MainPage {
    layout: StandardLayout,
}

impl MainPage {
    pub fn new() -> Self {
        Self {
            layout: StandardLayout,
        }
    }

    fn course_options() -> MenuList {
        MenuList::new()
            .add_item(
                MenuItem::new("🚀 2-Hour Quickstart Course")
                    .detail("Perfect for: Rapid prototyping and exploration")
                    .detail("Time: 2 hours")
                    .detail("Level: Beginner")
                    .detail("Outcome: Working AI agent demo"),
            )
            .add_item(
                MenuItem::new("📚 5-Day Comprehensive Workshop")
                    .detail("Perfect for: Production-ready expertise")
                    .detail("Time: 40 hours (5 days)")
                    .detail("Level: Intermediate to Advanced")
                    .detail("Outcome: Professional certification"),
            )
            .add_item(
                MenuItem::new("🤔 Help Me Choose")
                    .detail("Compare courses side-by-side")
                    .detail("Decision framework")
                    .detail("Personalized recommendations"),
            )
            .add_item(
                MenuItem::new("❓ Just Browse")
                    .detail("Explore all materials")
                    .detail("No commitment needed"),
            )
    }

    /// Prompt until one of the four keys is entered
    fn read_choice(&self, context: &mut PageContext) -> Result<MenuChoice> {
        loop {
            let answer = context.console.ask(CHOICE_PROMPT)?;
            match MenuChoice::parse(&answer) {
                Some(choice) => return Ok(choice),
                None => {
                    tracing::debug!(input = %answer, "rejected menu input");
                    context
                        .console
                        .line("Please enter 1, 2, 3, or 4".bright_yellow())?;
                }
            }
        }
    }

    /// Render the menu and block until a valid choice is made
    pub fn choose(&mut self, context: &mut PageContext) -> Result<MenuChoice> {
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title("📚 Choose Your Learning Path:")
            .add_content(Self::course_options());

        self.layout.render(components, context)?;

        let choice = self.read_choice(context)?;
        tracing::debug!(?choice, "menu selection");
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::framework::input::testing::scripted_console;
    use crate::menu::pages::testing::{RecordingOpener, context_with};

    #[test]
    fn test_menu_text_is_fixed() {
        let (console, buffer) = scripted_console(&["2"]);
        let opener = RecordingOpener::default();
        let mut context = context_with(console, &opener);

        let choice = MainPage::new().choose(&mut context).unwrap();

        assert_eq!(choice, MenuChoice::Comprehensive);
        let output = buffer.contents();
        assert!(output.contains("📚 Choose Your Learning Path:"));
        assert!(output.contains("4. "));
        assert!(output.contains("   • Outcome: Professional certification"));
        assert!(!output.contains("Ctrl+C"));
        assert!(!output.contains("Type a number"));
    }
}
