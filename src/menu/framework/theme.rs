//! Theme system for consistent prompt styling

use dialoguer::theme::ColorfulTheme;

/// Theme trait for customizing prompt appearance
pub trait Theme {
    /// Get dialoguer theme
    fn dialoguer_theme(&self) -> &ColorfulTheme;
}

/// Default theme implementation
pub struct DefaultTheme {
    dialoguer: ColorfulTheme,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self {
            dialoguer: ColorfulTheme::default(),
        }
    }
}

impl Theme for DefaultTheme {
    fn dialoguer_theme(&self) -> &ColorfulTheme {
        &self.dialoguer
    }
}
