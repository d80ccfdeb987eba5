use crate::job::RoomHandle;
use crate::runtime::{AgentRuntime, RuntimeEvent};
use anyhow::{Context, Result};
use cafevoice_types::Session;

/// Drives one session's lifecycle against the runtime.
///
/// The only behavior owned here is the session-start hook: once the runtime
/// reports the session live, exactly one opening reply is requested, before
/// any user audio is processed. Everything after that is the runtime's
/// turn-taking loop; this task just observes it.
pub struct AgentSession {
    room: RoomHandle,
    config: Session,
    events: tokio::task::JoinHandle<()>,
}

impl AgentSession {
    /// Starts a session bound to `room` and returns as soon as the runtime
    /// has accepted it. The opening reply is requested from a spawned task,
    /// so event delivery is never blocked on a reply cycle.
    pub async fn start<R>(mut runtime: R, config: Session, room: RoomHandle) -> Result<Self>
    where
        R: AgentRuntime + 'static,
    {
        let mut events = runtime
            .runtime_events()
            .await
            .context("failed to subscribe to runtime events")?;
        runtime
            .start_session(&room, config.clone())
            .await
            .with_context(|| format!("failed to start session for room {}", room.name()))?;

        let room_name = room.name().to_string();
        let events = tokio::spawn(async move {
            let mut greeted = false;
            while let Some(event) = events.recv().await {
                match event {
                    RuntimeEvent::SessionStarted if !greeted => {
                        greeted = true;
                        if let Err(e) = runtime.generate_reply().await {
                            tracing::error!(room = %room_name, "failed to request opening reply: {}", e);
                        }
                    }
                    RuntimeEvent::SessionStarted => {}
                    RuntimeEvent::UserTurnCommitted(transcript) => {
                        tracing::debug!(room = %room_name, "user turn committed: {}", transcript);
                    }
                    RuntimeEvent::ReplyStarted | RuntimeEvent::ReplyDone => {}
                    RuntimeEvent::Error(message) => {
                        tracing::error!(room = %room_name, "runtime error: {}", message);
                    }
                    RuntimeEvent::Closed => break,
                }
            }
            tracing::info!(room = %room_name, "session ended");
        });

        Ok(Self {
            room,
            config,
            events,
        })
    }

    pub fn room(&self) -> &RoomHandle {
        &self.room
    }

    pub fn config(&self) -> &Session {
        &self.config
    }

    /// Waits until the runtime tears the session down.
    pub async fn closed(self) -> Result<()> {
        self.events.await.context("session event task panicked")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runtime::MockAgentRuntime;
    use cafevoice_types::audio::{SttEndpointTurnDetection, TurnDetection};
    use tokio::sync::mpsc;

    fn config() -> Session {
        Session::new()
            .with_instructions("You collect cafeteria feedback.")
            .with_llm_model("gemini-2.0-flash")
            .with_turn_detection_enable(TurnDetection::SttEndpoint(
                SttEndpointTurnDetection::new(),
            ))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_opening_reply_fires_exactly_once() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(RuntimeEvent::SessionStarted).await.unwrap();
        tx.send(RuntimeEvent::SessionStarted).await.unwrap();
        tx.send(RuntimeEvent::Closed).await.unwrap();
        drop(tx);

        let mut runtime = MockAgentRuntime::new();
        runtime
            .expect_runtime_events()
            .return_once(move || Ok(rx));
        runtime
            .expect_start_session()
            .times(1)
            .returning(|_, _| Ok(()));
        runtime.expect_generate_reply().times(1).returning(|| Ok(()));

        let session = AgentSession::start(runtime, config(), RoomHandle::new("lunch-hall"))
            .await
            .unwrap();
        session.closed().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_returns_before_any_reply() {
        let (tx, rx) = mpsc::channel(8);

        let mut runtime = MockAgentRuntime::new();
        runtime
            .expect_runtime_events()
            .return_once(move || Ok(rx));
        runtime
            .expect_start_session()
            .times(1)
            .returning(|_, _| Ok(()));
        runtime.expect_generate_reply().times(0);

        // No session-started signal has been delivered, so start() must
        // return without any reply having been requested.
        let session = AgentSession::start(runtime, config(), RoomHandle::new("quiet-room"))
            .await
            .unwrap();
        assert_eq!(session.room().name(), "quiet-room");

        drop(tx);
        session.closed().await.unwrap();
    }

    #[tokio::test]
    async fn test_two_rooms_get_independent_sessions() {
        let mut sessions = Vec::new();
        for room in ["lunch-hall", "terrace"] {
            let (tx, rx) = mpsc::channel(8);
            tx.send(RuntimeEvent::SessionStarted).await.unwrap();
            tx.send(RuntimeEvent::Closed).await.unwrap();
            drop(tx);

            let mut runtime = MockAgentRuntime::new();
            runtime
                .expect_runtime_events()
                .return_once(move || Ok(rx));
            runtime
                .expect_start_session()
                .times(1)
                .returning(|_, _| Ok(()));
            runtime.expect_generate_reply().times(1).returning(|| Ok(()));

            let session = AgentSession::start(runtime, config(), RoomHandle::new(room))
                .await
                .unwrap();
            sessions.push(session);
        }

        // Same configuration values, no shared state between the two.
        assert_eq!(sessions[0].config(), sessions[1].config());
        assert_ne!(sessions[0].room(), sessions[1].room());
        for session in sessions {
            session.closed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_runtime_error_on_reply_does_not_kill_the_session() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(RuntimeEvent::SessionStarted).await.unwrap();
        tx.send(RuntimeEvent::UserTurnCommitted("the dal was cold".to_string()))
            .await
            .unwrap();
        tx.send(RuntimeEvent::Closed).await.unwrap();
        drop(tx);

        let mut runtime = MockAgentRuntime::new();
        runtime
            .expect_runtime_events()
            .return_once(move || Ok(rx));
        runtime
            .expect_start_session()
            .times(1)
            .returning(|_, _| Ok(()));
        runtime
            .expect_generate_reply()
            .times(1)
            .returning(|| Err(anyhow::anyhow!("runtime rejected the request")));

        let session = AgentSession::start(runtime, config(), RoomHandle::new("lunch-hall"))
            .await
            .unwrap();
        // The failed opening reply is logged; the event loop still drains to Closed.
        session.closed().await.unwrap();
    }
}
