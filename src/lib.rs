//! # learning-hub
//!
//! Interactive terminal navigator for the Kiro + Strands learning courses

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod observability;
pub mod system;

// Re-export commonly used types
pub use config::HubConfig;
pub use error::{Error, Result};
pub use menu::{ExitReason, MenuApplication, MenuChoice};
