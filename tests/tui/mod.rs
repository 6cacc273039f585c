//! TUI unit tests module
//!
//! - chat/: input mapping and render tests

pub mod chat;
