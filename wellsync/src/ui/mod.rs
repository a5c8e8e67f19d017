//! UI module for the WellSync TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
