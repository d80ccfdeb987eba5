//! Provider-agnostic agent abstractions: the fixed interface to the external
//! realtime runtime, and the session lifecycle driver built on top of it.

pub mod job;
pub mod runtime;
pub mod session;

pub use job::{JobContext, RoomHandle};
pub use runtime::{AgentRuntime, RuntimeEvent};
pub use session::AgentSession;
