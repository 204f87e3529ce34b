//! System utilities module

mod helpers;
mod opener;
pub mod providers;

// Public exports
pub use helpers::open_file;
pub use opener::{FileOpener, FileOpenerFactory, Platform};
