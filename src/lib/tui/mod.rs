//! TUI module for the terminal chat interface using Ratatui

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
