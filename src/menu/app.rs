//! Application class driving the main menu loop

use super::choice::MenuChoice;
use super::framework::PageContext;
use super::pages::MainPage;
use crate::error::Result;
use colored::*;

pub const CONTINUE_PROMPT: &str = "Would you like to return to the main menu? (y/n): ";

/// Printed when the user cancels at any prompt
pub const FAREWELL: &str = "Goodbye! 👋";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user declined to return to the main menu
    Finished,
    /// Ctrl+C or closed input at a prompt
    Interrupted,
}

enum MenuState {
    Menu,
    Handler(MenuChoice),
    Exit,
}

/// Main application class
pub struct MenuApplication {
    context: PageContext,
}

impl MenuApplication {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    /// Run the application until the user leaves
    ///
    /// Cancellation is not an error: the farewell is printed and
    /// [`ExitReason::Interrupted`] returned.
    pub fn run(&mut self) -> Result<ExitReason> {
        match self.run_loop() {
            Ok(()) => {
                self.print_closing()?;
                Ok(ExitReason::Finished)
            }
            Err(e) if e.is_cancellation() => {
                tracing::debug!(reason = %e, "session cancelled");
                self.context.console.blank()?;
                self.context.console.line(FAREWELL)?;
                Ok(ExitReason::Interrupted)
            }
            Err(e) => Err(e),
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        let mut state = MenuState::Menu;
        loop {
            state = match state {
                MenuState::Menu => MenuState::Handler(MainPage::new().choose(&mut self.context)?),
                MenuState::Handler(choice) => {
                    let mut page = choice.page();
                    tracing::debug!(page = page.title(), "entering page");
                    page.render(&mut self.context)?;

                    self.context.console.blank()?;
                    if self.context.console.confirm(CONTINUE_PROMPT)? {
                        MenuState::Menu
                    } else {
                        MenuState::Exit
                    }
                }
                MenuState::Exit => return Ok(()),
            };
        }
    }

    fn print_closing(&mut self) -> Result<()> {
        let console = &mut self.context.console;
        console.blank()?;
        console.line("🎉 Happy learning! Build amazing AI agents! 🤖".bright_green().bold())?;
        console.line("💬 Need help? Check the support info in each course README")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::courses::{COMPARISON_GUIDE, QUICKSTART_README};
    use crate::error::Error;
    use crate::menu::framework::input::testing::{SharedBuffer, scripted_console};
    use crate::menu::framework::{Console, LineInput, TOOL_TITLE};
    use std::collections::VecDeque;
    use std::io::Write;
    use crate::menu::pages::main_page::CHOICE_PROMPT;
    use crate::menu::pages::testing::{RecordingOpener, context_with};

    const CLOSING: &str = "🎉 Happy learning! Build amazing AI agents! 🤖";

    fn run_script(answers: &[&str]) -> (ExitReason, String, RecordingOpener) {
        let (console, buffer): (_, SharedBuffer) = scripted_console(answers);
        let opener = RecordingOpener::default();
        let mut app = MenuApplication::new(context_with(console, &opener));
        let reason = app.run().unwrap();
        (reason, buffer.contents(), opener)
    }

    #[test]
    fn test_quickstart_accept_then_exit() {
        let (reason, output, opener) = run_script(&["1", "y", "n"]);

        assert_eq!(reason, ExitReason::Finished);
        assert_eq!(opener.opened(), vec![QUICKSTART_README.to_string()]);
        assert_eq!(output.matches(CLOSING).count(), 1);
        assert!(output.contains(CONTINUE_PROMPT));
        assert!(output.trim_end().ends_with("💬 Need help? Check the support info in each course README"));
    }

    #[test]
    fn test_comprehensive_decline_everything() {
        let (reason, output, opener) = run_script(&["2", "n", "n", "n"]);

        assert_eq!(reason, ExitReason::Finished);
        assert!(opener.opened().is_empty());
        assert!(output.contains("⚠️  Important Prerequisites:"));
        assert!(output.contains("Would you like to try the quickstart instead? (y/n): "));
        assert!(!output.contains("2-Hour Quickstart Course Selected!"));
        assert_eq!(output.matches(CLOSING).count(), 1);
    }

    #[test]
    fn test_invalid_input_reprompts_without_dispatch() {
        let (reason, output, opener) = run_script(&["0", "five", "", "12", "3", "", "no"]);

        assert_eq!(reason, ExitReason::Finished);
        assert_eq!(output.matches("Please enter 1, 2, 3, or 4").count(), 4);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 5);
        assert_eq!(opener.opened(), vec![COMPARISON_GUIDE.to_string()]);
        // Header printed once for the menu, once for the comparison page
        assert_eq!(output.matches(TOOL_TITLE).count(), 2);
    }

    #[test]
    fn test_quickstart_dispatched_once_per_selection() {
        let (_, output, opener) = run_script(&["1", "n", "Y", "1", "n", "n"]);

        assert!(opener.opened().is_empty());
        assert_eq!(output.matches("🚀 2-Hour Quickstart Course Selected!").count(), 2);
        assert_eq!(output.matches(CONTINUE_PROMPT).count(), 2);
        assert_eq!(output.matches(CLOSING).count(), 1);
    }

    #[test]
    fn test_retry_matches_direct_quickstart() {
        let (_, via_retry, retry_opener) = run_script(&["2", "n", "y", "y", "n"]);
        let (_, direct, direct_opener) = run_script(&["1", "y", "n"]);

        // Everything from the last page header onward must be identical
        let tail = |output: &str| {
            let start = output.rfind(TOOL_TITLE).unwrap();
            output[start..].to_string()
        };
        assert_eq!(tail(&via_retry), tail(&direct));
        assert_eq!(retry_opener.opened(), direct_opener.opened());
    }

    #[test]
    fn test_continue_only_on_y() {
        for answer in ["n", "yes", "", "q", " no "] {
            let (reason, output, _) = run_script(&["4", "", answer]);
            assert_eq!(reason, ExitReason::Finished);
            assert_eq!(output.matches("📁 Browse All Materials").count(), 1);
            assert_eq!(output.matches(CLOSING).count(), 1);
        }

        let (_, output, _) = run_script(&["4", "", " y ", "4", "", "n"]);
        assert_eq!(output.matches("📁 Browse All Materials").count(), 2);
    }

    /// Answers from a queue, then behaves like Ctrl+C at the next prompt
    struct InterruptingInput {
        answers: VecDeque<&'static str>,
    }

    impl LineInput for InterruptingInput {
        fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> crate::error::Result<String> {
            write!(out, "{}", prompt)?;
            match self.answers.pop_front() {
                Some(answer) => Ok(answer.to_string()),
                None => Err(Error::Interrupted),
            }
        }
    }

    #[test]
    fn test_ctrl_c_mid_handler_says_goodbye() {
        let (_, buffer) = scripted_console(&[]);
        let console = Console::new(
            Box::new(InterruptingInput {
                answers: VecDeque::from(["2", "n"]),
            }),
            Box::new(buffer.clone()),
        );
        let opener = RecordingOpener::default();
        let mut app = MenuApplication::new(context_with(console, &opener));

        let reason = app.run().unwrap();

        assert_eq!(reason, ExitReason::Interrupted);
        let output = buffer.contents();
        assert!(output.contains("Would you like to try the quickstart instead? (y/n): "));
        assert_eq!(output.matches(FAREWELL).count(), 1);
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(!output.contains(CONTINUE_PROMPT));
        assert!(!output.contains(CLOSING));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_closed_input_says_goodbye() {
        let (reason, output, _) = run_script(&["2", "n"]);

        assert_eq!(reason, ExitReason::Interrupted);
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(!output.contains(CLOSING));
    }
}
