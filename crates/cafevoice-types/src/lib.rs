//! Configuration and wire types for the cafevoice runtime control protocol.

pub mod audio;
pub mod error;
pub mod events;
pub mod session;

// Re-export the types most callers need directly.
pub use error::ConfigError;
pub use events::{ClientEvent, ServerEvent};
pub use session::Session;
