use anyhow::Result;
use cafevoice_types as types;
use cafevoice_types::events::client::{ResponseCreateEvent, SessionEndEvent, SessionStartEvent};
use futures_util::{SinkExt, StreamExt};
use std::sync::{Arc, Mutex};
use tokio_tungstenite::tungstenite::Message;

mod config;
mod consts;
mod stats;
mod utils;

pub use config::{Config, ConfigBuilder};
pub use stats::Stats;

pub type ClientTx = tokio::sync::mpsc::Sender<types::ClientEvent>;
type ServerTx = tokio::sync::broadcast::Sender<types::ServerEvent>;
pub type ServerRx = tokio::sync::broadcast::Receiver<types::ServerEvent>;

/// Holds the channel capacity, the worker configuration, the client/server
/// transmitters, and the per-connection stats guarded by a Mutex.
pub struct Client {
    capacity: usize,
    config: config::Config,
    c_tx: Option<ClientTx>,
    s_tx: Option<ServerTx>,
    stats: Arc<Mutex<Stats>>,
}

impl Client {
    fn new(capacity: usize, config: config::Config) -> Self {
        Self {
            capacity,
            config,
            c_tx: None,
            s_tx: None,
            stats: Arc::new(Mutex::new(Stats::new())),
        }
    }

    async fn connect(&mut self) -> Result<()> {
        if self.c_tx.is_some() {
            return Err(anyhow::anyhow!("already connected"));
        }

        let request = utils::build_request(&self.config)?;
        let (ws_stream, _) = tokio_tungstenite::connect_async(request).await?;
        let (mut write, mut read) = ws_stream.split();

        let (c_tx, mut c_rx) = tokio::sync::mpsc::channel(self.capacity);
        let (s_tx, _) = tokio::sync::broadcast::channel(self.capacity);

        self.c_tx = Some(c_tx.clone());
        self.s_tx = Some(s_tx.clone());

        // Serialize outgoing control events onto the socket.
        tokio::spawn(async move {
            while let Some(event) = c_rx.recv().await {
                match serde_json::to_string(&event) {
                    Ok(text) => {
                        if let Err(e) = write.send(Message::Text(text)).await {
                            tracing::error!("failed to send message: {}", e);
                        }
                    }
                    Err(e) => {
                        tracing::error!("failed to serialize event: {}", e);
                    }
                }
            }
        });

        let stats = self.stats.clone();
        // Parse incoming runtime events and fan them out to every subscriber.
        tokio::spawn(async move {
            while let Some(message) = read.next().await {
                let message = match message {
                    Err(e) => {
                        tracing::error!("failed to read message: {}", e);
                        break;
                    }
                    Ok(message) => message,
                };
                match message {
                    Message::Text(text) => {
                        match serde_json::from_str::<types::ServerEvent>(&text) {
                            Ok(event) => {
                                tracing::debug!("received event: {:?}", event);
                                if let Ok(mut stats) = stats.lock() {
                                    match &event {
                                        types::ServerEvent::JobAssigned(_) => stats.record_job(),
                                        types::ServerEvent::UserTurnCommitted(_) => {
                                            stats.record_turn()
                                        }
                                        types::ServerEvent::ReplyDone(_) => stats.record_reply(),
                                        _ => {}
                                    }
                                }
                                if let Err(e) = s_tx.send(event) {
                                    tracing::error!("failed to forward event: {}", e);
                                }
                            }
                            Err(e) => {
                                tracing::error!("failed to deserialize event: {} ({})", e, text);
                            }
                        }
                    }
                    Message::Close(frame) => {
                        let reason = frame.map(|f| f.reason.to_string());
                        tracing::info!("runtime closed the connection: {:?}", reason);
                        if let Err(e) = s_tx.send(types::ServerEvent::Close { reason }) {
                            tracing::error!("failed to forward close event: {}", e);
                        }
                        break;
                    }
                    _ => {}
                }
            }
        });

        Ok(())
    }

    async fn send(&mut self, event: types::ClientEvent) -> Result<()> {
        let c_tx = self
            .c_tx
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("not connected"))?;
        c_tx.send(event)
            .await
            .map_err(|e| anyhow::anyhow!("failed to send event: {}", e))
    }

    /// Sends `session.start`, binding a session configuration to a room.
    pub async fn start_session(&mut self, room: &str, session: types::Session) -> Result<()> {
        self.send(types::ClientEvent::SessionStart(SessionStartEvent::new(
            room, session,
        )))
        .await
    }

    /// Sends `response.create` for the given room. Resolves once the command
    /// is queued; the reply itself arrives as runtime events.
    pub async fn generate_reply(&mut self, room: &str) -> Result<()> {
        self.send(types::ClientEvent::ResponseCreate(ResponseCreateEvent::new(
            room,
        )))
        .await
    }

    /// Sends `session.end` for the given room.
    pub async fn end_session(&mut self, room: &str) -> Result<()> {
        self.send(types::ClientEvent::SessionEnd(SessionEndEvent::new(room)))
            .await
    }

    /// A clone of the outgoing command channel, for per-session adapters.
    pub fn client_tx(&self) -> Result<ClientTx> {
        self.c_tx
            .clone()
            .ok_or_else(|| anyhow::anyhow!("not connected"))
    }

    /// A fresh subscription to the runtime's event broadcast.
    pub fn server_events(&self) -> Result<ServerRx> {
        self.s_tx
            .as_ref()
            .map(|s_tx| s_tx.subscribe())
            .ok_or_else(|| anyhow::anyhow!("not connected"))
    }

    pub fn stats(&self) -> Result<Stats> {
        self.stats
            .lock()
            .map(|stats| stats.clone())
            .map_err(|_| anyhow::anyhow!("stats lock poisoned"))
    }
}

/// Connects with configuration taken from the environment.
pub async fn connect() -> Result<Client> {
    connect_with_config(consts::DEFAULT_CAPACITY, Config::new()).await
}

pub async fn connect_with_config(capacity: usize, config: Config) -> Result<Client> {
    let mut client = Client::new(capacity, config);
    client.connect().await?;
    Ok(client)
}
