//! Interactive menu module

pub mod app;
pub mod choice;
pub mod courses;
pub mod framework;
pub mod pages;

pub use app::{ExitReason, FAREWELL, MenuApplication};
pub use choice::MenuChoice;
