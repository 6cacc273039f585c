//! Chat backend module
//!
//! - traits.rs: the `Backend` seam the session is driven against
//! - types.rs: error type shared by all implementations
//! - http.rs: JSON-over-HTTP implementation

pub mod http;
pub mod traits;
pub mod types;

pub use http::HttpBackend;
pub use traits::Backend;
pub use types::BackendError;
