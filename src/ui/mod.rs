//! Terminal User Interface components

mod app;
pub mod theme;
mod widgets;

pub use app::{App, AppState, Dialog, Mode, SavePrompt};
pub use theme::ThemeColors;
pub use widgets::*;
