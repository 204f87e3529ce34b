//! UI components for menu pages

use colored::*;
use std::io::{self, Write};

/// Base trait for all UI components
pub trait Component {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// One numbered entry of a [`MenuList`]
pub struct MenuItem {
    pub label: String,
    pub details: Vec<String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            details: Vec::new(),
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

/// Numbered menu with descriptive sub-bullets
pub struct MenuList {
    pub items: Vec<MenuItem>,
}

impl MenuList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Component for MenuList {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, item.label.bold())?;
            for detail in &item.details {
                writeln!(out, "   • {}", detail)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Content area for displaying text
pub struct ContentArea {
    pub content: Vec<String>,
}

impl ContentArea {
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    /// Titled bullet list
    pub fn add_section(mut self, title: impl Into<String>, lines: &[&str]) -> Self {
        let title: String = title.into();
        self.content.push(title.bold().to_string());
        for line in lines {
            self.content.push(format!("• {}", line));
        }
        self.content.push(String::new());
        self
    }

    /// Titled numbered checklist
    pub fn add_steps(mut self, title: impl Into<String>, steps: &[&str]) -> Self {
        let title: String = title.into();
        self.content.push(title.bold().to_string());
        for (index, step) in steps.iter().enumerate() {
            self.content.push(format!("{}. {}", index + 1, step));
        }
        self.content.push(String::new());
        self
    }
}

impl Component for ContentArea {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in &self.content {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
