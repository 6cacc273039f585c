//! Adapters to the world outside the process.

pub mod backend;
