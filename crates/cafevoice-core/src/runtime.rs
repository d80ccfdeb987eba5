use crate::job::RoomHandle;
use anyhow::Result;
use async_trait::async_trait;
use cafevoice_types::Session;

/// A trait abstracting the external realtime agent runtime.
/// The runtime owns the whole media loop (listen, detect end of turn,
/// transcribe, generate, synthesize, play); this interface only starts a
/// session, requests replies, and observes lifecycle events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Binds the given session configuration to a room and starts the loop.
    async fn start_session(&mut self, room: &RoomHandle, config: Session) -> Result<()>;

    /// Requests one generated reply. Resolves when the runtime has accepted
    /// the request, not when synthesis completes.
    async fn generate_reply(&mut self) -> Result<()>;

    /// Asks the runtime to tear the session down.
    async fn end_session(&mut self) -> Result<()>;

    /// Returns a channel receiver for the runtime's lifecycle events.
    async fn runtime_events(&mut self) -> Result<tokio::sync::mpsc::Receiver<RuntimeEvent>>;
}

/// Generic lifecycle events any runtime implementation can emit back.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeEvent {
    /// The session is live; user audio will be processed from here on.
    SessionStarted,
    /// The runtime committed one user turn, with its transcript.
    UserTurnCommitted(String),
    /// The agent's synthesized reply started playing.
    ReplyStarted,
    /// The agent's synthesized reply finished playing.
    ReplyDone,
    Error(String),
    Closed,
}
