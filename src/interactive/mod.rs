//! Interactive terminal interface
//!
//! ratatui/crossterm front-end: draws the session and feeds key presses and
//! clicks back into it.

pub mod app;
pub mod input;
pub mod layout;
pub mod rendering;

pub use app::{App, Hud, run_tui};
pub use rendering::TerminalPresenter;
