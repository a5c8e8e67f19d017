//! TUI widgets for WellSync

pub mod chat;
pub mod input;
pub mod navbar;
pub mod status_bar;

pub use chat::ChatWidget;
pub use input::InputWidget;
pub use navbar::NavbarWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
