//! Adapter implementing the generic `AgentRuntime` trait over the worker's
//! control channels, so the session driver never sees the wire protocol.

use anyhow::Result;
use async_trait::async_trait;
use cafevoice_core::{AgentRuntime, RoomHandle, RuntimeEvent};
use cafevoice_types::events::client::{ResponseCreateEvent, SessionEndEvent, SessionStartEvent};
use cafevoice_types::{ClientEvent, ServerEvent, Session};
use cafevoice_worker::{ClientTx, ServerRx};
use tokio::sync::broadcast;

/// One adapter per session. The worker socket is shared across sessions, so
/// incoming events are filtered down to this adapter's room.
pub struct WorkerRuntime {
    room: String,
    commands: ClientTx,
    events: Option<ServerRx>,
}

impl WorkerRuntime {
    pub fn new(room: &str, commands: ClientTx, events: ServerRx) -> Self {
        Self {
            room: room.to_string(),
            commands,
            events: Some(events),
        }
    }

    async fn send(&self, event: ClientEvent) -> Result<()> {
        self.commands
            .send(event)
            .await
            .map_err(|e| anyhow::anyhow!("worker command channel closed: {}", e))
    }
}

#[async_trait]
impl AgentRuntime for WorkerRuntime {
    async fn start_session(&mut self, room: &RoomHandle, config: Session) -> Result<()> {
        self.send(ClientEvent::SessionStart(SessionStartEvent::new(
            room.name(),
            config,
        )))
        .await
    }

    async fn generate_reply(&mut self) -> Result<()> {
        self.send(ClientEvent::ResponseCreate(ResponseCreateEvent::new(
            &self.room,
        )))
        .await
    }

    async fn end_session(&mut self) -> Result<()> {
        self.send(ClientEvent::SessionEnd(SessionEndEvent::new(&self.room)))
            .await
    }

    async fn runtime_events(&mut self) -> Result<tokio::sync::mpsc::Receiver<RuntimeEvent>> {
        let mut wire_rx = self
            .events
            .take()
            .ok_or_else(|| anyhow::anyhow!("runtime_events channel has already been taken"))?;
        let room = self.room.clone();
        let (tx, rx) = tokio::sync::mpsc::channel(128);

        tokio::spawn(async move {
            loop {
                let event = match wire_rx.recv().await {
                    Ok(event) => event,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(room = %room, "event stream lagged, skipped {} events", skipped);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let generic = match event {
                    ServerEvent::SessionStarted(e) if e.room() == room => {
                        Some(RuntimeEvent::SessionStarted)
                    }
                    ServerEvent::UserTurnCommitted(e) if e.room() == room => {
                        Some(RuntimeEvent::UserTurnCommitted(e.transcript().to_string()))
                    }
                    ServerEvent::ReplyStarted(e) if e.room() == room => {
                        Some(RuntimeEvent::ReplyStarted)
                    }
                    ServerEvent::ReplyDone(e) if e.room() == room => Some(RuntimeEvent::ReplyDone),
                    ServerEvent::SessionClosed(e) if e.room() == room => Some(RuntimeEvent::Closed),
                    ServerEvent::Error(e) if e.error().room() == Some(room.as_str()) => {
                        Some(RuntimeEvent::Error(e.error().message().to_string()))
                    }
                    // The whole connection is gone, every session with it.
                    ServerEvent::Close { .. } => Some(RuntimeEvent::Closed),
                    _ => None,
                };
                if let Some(generic) = generic {
                    let closed = matches!(generic, RuntimeEvent::Closed);
                    if tx.send(generic).await.is_err() {
                        tracing::warn!(room = %room, "runtime event receiver dropped, stopping adapter task");
                        break;
                    }
                    if closed {
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }
}
