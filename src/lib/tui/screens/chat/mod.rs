//! TUI Chat interface module
//!
//! - input.rs: maps key events to session edits and actions
//! - ui.rs: renders a `ChatSession`
//! - runner.rs: event loop, spawns backend calls and applies their results

mod input;
mod runner;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, run_chat};
pub use ui::ChatUI;
