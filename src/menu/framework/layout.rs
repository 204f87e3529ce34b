//! Layout system for organizing components

use super::components::Component;
use super::page::PageContext;
use super::screen::Screen;
use crate::error::Result;
use colored::*;
use std::io::Write;

/// Banner shown at the top of every page
pub const TOOL_TITLE: &str = "🚀 Kiro IDE + Strands SDK Learning Hub";

const RULE_WIDTH: usize = 50;

/// Layout trait for organizing page components
pub trait Layout {
    /// Render the complete layout with components
    fn render(&self, components: LayoutComponents, context: &mut PageContext) -> Result<()>;
}

/// Components that can be placed in a layout
pub struct LayoutComponents<'a> {
    pub tool_title: String,
    pub page_title: Option<String>,
    pub content: Vec<Box<dyn Component + 'a>>,
}

impl<'a> LayoutComponents<'a> {
    pub fn new(tool_title: impl Into<String>) -> Self {
        Self {
            tool_title: tool_title.into(),
            page_title: None,
            content: Vec::new(),
        }
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn add_content<C: Component + 'a>(mut self, component: C) -> Self {
        self.content.push(Box::new(component));
        self
    }
}

/// Standard layout implementation
pub struct StandardLayout;

impl StandardLayout {
    /// Render tool title with double line separator
    fn render_tool_title(&self, out: &mut dyn Write, title: &str) -> std::io::Result<()> {
        writeln!(out, "{}", title.bright_cyan().bold())?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH).bright_cyan())?;
        writeln!(out)
    }

    fn render_page_title(&self, out: &mut dyn Write, title: &str) -> std::io::Result<()> {
        writeln!(out, "{}", title.bright_white().bold())
    }
}

impl Layout for StandardLayout {
    fn render(&self, components: LayoutComponents, context: &mut PageContext) -> Result<()> {
        let clear = context.config.clear_screen;
        let out = context.console.out();

        // 1. Fresh view
        Screen::clear(out, clear)?;

        // 2. Tool title + rule
        self.render_tool_title(out, &components.tool_title)?;

        // 3. Page title, when present
        if let Some(page_title) = &components.page_title {
            self.render_page_title(out, page_title)?;
            writeln!(out)?;
        }

        // 4. Content
        for component in components.content {
            component.render(out)?;
        }

        Ok(())
    }
}
