//! # Application Module
//!
//! Chat interaction logic, independent of any terminal.
//!
//! ## Submodules
//!
//! - [`session`] - Transcript, draft, typing indicator and feedback state machine
//! - [`client`] - Async driver running session transitions against a backend

pub mod client;
pub mod session;

pub use client::ChatClient;
pub use session::{ChatSession, Focus, InputState, PendingFeedback, PendingSend, SendReport};
