//! Menu framework module

pub mod components;
pub mod input;
pub mod layout;
pub mod page;
pub mod screen;
pub mod theme;

pub use components::{ContentArea, MenuItem, MenuList};
pub use input::{Console, LineInput, ReaderInput, TerminalInput};
pub use layout::{Layout, LayoutComponents, StandardLayout, TOOL_TITLE};
pub use page::{Page, PageContext};
pub use theme::{DefaultTheme, Theme};
